//! Fuzz target for the stock masking rule.
//!
//! Tests that `default_mask` handles arbitrary span bytes and offset
//! combinations without panicking, including offsets larger than the span.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrub_core::{default_mask, EntityConfig};

#[derive(Arbitrary, Debug)]
struct MaskInput<'a> {
    detected: &'a [u8],
    mask: char,
    prefix: u8,
    suffix: u8,
}

fuzz_target!(|input: MaskInput| {
    let config =
        EntityConfig::mask_keeping(input.mask, input.prefix as usize, input.suffix as usize);
    let masked = default_mask(input.detected, &config);

    // Every input byte becomes either itself or one mask character, so the
    // output covers the span and expands at most fourfold.
    assert!(masked.len() >= input.detected.len());
    assert!(masked.len() <= input.detected.len() * input.mask.len_utf8());
});
