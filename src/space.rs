//! Ready-made capacity types.
//!
//! The second type parameter of [`PolyBox`] is any sized type; only its size
//! and alignment matter. The types here cover the common word-multiple
//! capacities. A custom type works just as well:
//!
//! ```
//! use polybox::PolyBox;
//!
//! #[repr(align(64))]
//! struct CacheLine([u8; 64]);
//!
//! let value: PolyBox<u32, CacheLine> = PolyBox::new(7);
//! assert!(value.is_inlined());
//! ```
//!
//! [`PolyBox`]: crate::PolyBox

/// Capacity of one machine word.
pub struct S1 {
    #[allow(dead_code)]
    inner: [usize; 1],
}

/// Capacity of 2 machine words.
pub struct S2 {
    #[allow(dead_code)]
    inner: [usize; 2],
}

/// Capacity of 4 machine words.
pub struct S4 {
    #[allow(dead_code)]
    inner: [usize; 4],
}

/// Capacity of 8 machine words.
pub struct S8 {
    #[allow(dead_code)]
    inner: [usize; 8],
}

/// Capacity of 16 machine words.
pub struct S16 {
    #[allow(dead_code)]
    inner: [usize; 16],
}

/// Capacity of 32 machine words.
pub struct S32 {
    #[allow(dead_code)]
    inner: [usize; 32],
}

/// Capacity of 64 machine words.
pub struct S64 {
    #[allow(dead_code)]
    inner: [usize; 64],
}
