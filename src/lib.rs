//! # PolyBox: Inline-First Polymorphic Ownership
//!
//! [`PolyBox`] is a move-only alternative to [`Box`] for values used through
//! an erased interface (a trait object, a slice, or a closure type). It
//! embeds the value directly in its own storage whenever the value fits a
//! caller-chosen capacity, and falls back to a heap allocation otherwise.
//! Moving a box into a box type with a *different* capacity re-decides the
//! placement, so a value migrates between inline and heap storage without
//! the code using it ever noticing.
//!
//! ## Core Concept
//!
//! A `PolyBox<T, Space>` owns exactly one value of some erased concrete
//! type. `T` is the interface the value is used through; `Space` is any
//! sized type whose size and alignment define the inline budget. Placement
//! is decided purely from the concrete type's layout, never from its
//! contents.
//!
//! ## Quick Start
//!
//! Add PolyBox to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! polybox = "0.1"
//! ```
//!
//! Basic usage:
//!
//! ```rust
//! use std::fmt::Display;
//!
//! use polybox::space::S2;
//! use polybox::{polybox, PolyBox};
//!
//! // Small values live inside the box itself.
//! let short: PolyBox<dyn Display, S2> = polybox!(7u32);
//! assert!(short.is_inlined());
//!
//! // Large values fall back to the heap automatically.
//! let long: PolyBox<dyn Display, S2> = polybox!("a string owning its buffer".to_string());
//! assert!(!long.is_inlined());
//!
//! // Use both like a regular Box.
//! assert_eq!(format!("{short} and {long}"), "7 and a string owning its buffer");
//! ```
//!
//! ## Choosing a Capacity
//!
//! The [`space`] module provides word-multiple capacities (`S1` through
//! `S64`). Any sized type works, which also controls alignment:
//!
//! ```rust
//! use polybox::PolyBox;
//!
//! type Space = [u8; 128];
//!
//! let value: PolyBox<[u8; 100], Space> = PolyBox::new([0; 100]);
//! assert!(value.is_inlined());
//! ```
//!
//! **Important**: alignment matters. A value whose alignment exceeds the
//! space's alignment is heap-allocated regardless of its size.
//!
//! ## Relocation
//!
//! Boxes over the same interface but different capacities are distinct
//! types; [`PolyBox::resize`] moves a value between them and re-decides its
//! placement each time:
//!
//! ```rust
//! use std::any::Any;
//!
//! use polybox::space::{S1, S4};
//! use polybox::{polybox, PolyBox};
//!
//! let roomy: PolyBox<dyn Any, S4> = polybox!([1usize, 2]);
//! assert!(roomy.is_inlined());
//!
//! let tight: PolyBox<dyn Any, S1> = roomy.resize();
//! assert!(!tight.is_inlined());
//!
//! // Values come back inline as soon as there is room again.
//! let roomy: PolyBox<dyn Any, S4> = tight.resize();
//! assert!(roomy.is_inlined());
//! assert_eq!(roomy.downcast_ref::<[usize; 2]>(), Some(&[1, 2]));
//! ```
//!
//! ## Taking Ownership Back Out
//!
//! [`PolyBox::release`] hands the value out as a `Box<U>` after proving
//! that the held value is exactly a `U`; [`PolyBox::into_box`] hands it out
//! behind the erased interface:
//!
//! ```rust
//! use std::any::Any;
//!
//! use polybox::space::S2;
//! use polybox::{polybox, PolyBox};
//!
//! let mut value: PolyBox<dyn Any, S2> = polybox!(42u32);
//! assert!(value.release::<u64>().is_none());
//!
//! let num: Box<u32> = value.release::<u32>().unwrap();
//! assert_eq!(*num, 42);
//! assert!(value.is_empty());
//! ```
//!
//! Note the cost asymmetry: a heap-held value hands over the allocation it
//! already owns, while an inline value has to be moved into a fresh
//! allocation first.
//!
//! ## Adopting Existing Allocations
//!
//! [`polybox_adopt!`] transfers a `Box<U>` of exactly known type into a
//! box, moving the value inline when it fits. [`PolyBox::from_box`] adopts
//! a `Box<T>` whose concrete type is unknown; such a value is kept on the
//! heap forever, because truncating it into an inline slot sized for less
//! than its real type would be unsound to even attempt, and its address
//! never changes.
//!
//! ## Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Links the standard library. Disable for `#![no_std]` environments:
//!     `default-features = false`. The crate always requires `alloc`.
//!
//! - **`coerce`** (optional, requires nightly)
//!   - Safe generic constructors ([`PolyBox::from_value`],
//!     [`PolyBox::emplace`], [`PolyBox::adopt`]) in place of the macros,
//!     using the unstable `Unsize` trait.
//!
//! - **`nightly`** (optional, implies `coerce`)
//!   - Strict-provenance pointer handling internally.

#![cfg_attr(feature = "nightly", feature(set_ptr_value))]
#![cfg_attr(feature = "coerce", feature(unsize))]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(stable_features)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

extern crate alloc;

mod polybox;
pub mod space;
mod sptr;
mod storage;

pub use crate::polybox::PolyBox;
