//! Fuzz target for single-text scrubbing.
//!
//! Tests that the stock scrubber handles arbitrary input text without
//! panicking and always produces valid UTF-8.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use scrub_core::{ScrubConfig, Scrubber};

static SCRUBBER: OnceLock<Scrubber> = OnceLock::new();

fuzz_target!(|text: &str| {
    let scrubber = SCRUBBER.get_or_init(|| {
        Scrubber::new(ScrubConfig::default()).expect("stock config must build")
    });
    // Built-in matchers only report in-bounds spans, so scrubbing arbitrary
    // text must succeed; output validity is checked by String itself.
    let _ = scrubber.scrub_text(text);
});
