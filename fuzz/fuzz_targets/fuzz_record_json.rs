//! Fuzz target for structural redaction of parsed JSON.
//!
//! Tests that arbitrary bytes, when they parse as JSON at all, convert into
//! a value tree and redact without panicking. Deeply nested payloads must
//! surface as a depth error, not a stack overflow.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use scrub_core::{ScrubConfig, Scrubber};
use scrub_record::{Field, RecordRedactor, Value};

static SCRUBBER: OnceLock<Scrubber> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let scrubber = SCRUBBER.get_or_init(|| {
        Scrubber::new(ScrubConfig::default()).expect("stock config must build")
    });

    let record = Value::Record(vec![Field::redacted("payload", Value::from(json))]);
    let _ = RecordRedactor::new(scrubber).redact(&record);
});
