use std::fmt::Debug;

use polybox::space::{S1, S64};
use polybox::{polybox, PolyBox};

fn main() {
    divan::main();
}

#[divan::bench]
fn polybox_small_item_small_space() {
    divan::black_box({
        let small: PolyBox<dyn Debug, S1> = polybox!(divan::black_box(true));
        small
    });
}

#[divan::bench]
fn polybox_small_item_large_space() {
    divan::black_box({
        let small: PolyBox<dyn Debug, S64> = polybox!(divan::black_box(true));
        small
    });
}

#[divan::bench]
fn polybox_large_item_small_space() {
    divan::black_box({
        let large: PolyBox<dyn Debug, S1> = polybox!(divan::black_box([0usize; 64]));
        large
    });
}

#[divan::bench]
fn polybox_large_item_large_space() {
    divan::black_box({
        let large: PolyBox<dyn Debug, S64> = polybox!(divan::black_box([0usize; 64]));
        large
    });
}

#[divan::bench]
fn polybox_resize_inline_to_heap() {
    divan::black_box({
        let value: PolyBox<dyn Debug, S64> = polybox!(divan::black_box([0usize; 64]));
        let value: PolyBox<dyn Debug, S1> = value.resize();
        value
    });
}

#[divan::bench]
fn box_small_item() {
    divan::black_box({
        let small: Box<dyn Debug> = Box::new(divan::black_box(true));
        small
    });
}

#[divan::bench]
fn box_large_item() {
    divan::black_box({
        let large: Box<dyn Debug> = Box::new(divan::black_box([0usize; 64]));
        large
    });
}
