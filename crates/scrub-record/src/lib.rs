//! Tag-driven structural redaction over nested values.
//!
//! This crate extends the text scrubbing engine to structured data: callers
//! describe a record as an owned [`Value`] tree with per-field redaction
//! tags, and [`RecordRedactor`] produces a deep copy in which every string
//! leaf under a tagged field has been scrubbed. Everything else is copied
//! verbatim, including absent references.
//!
//! # Example
//!
//! ```
//! use scrub_core::{ScrubConfig, Scrubber};
//! use scrub_record::{Field, RecordRedactor, Value};
//!
//! let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
//! let record = Value::Record(vec![
//!     Field::new("note", Value::text("call 9140520809 now")),
//!     Field::redacted("contact", Value::text("call 9140520809 now")),
//! ]);
//!
//! let redacted = RecordRedactor::new(&scrubber).redact(&record).unwrap();
//! let json = serde_json::Value::from(redacted);
//! assert_eq!(json["note"], "call 9140520809 now");
//! assert_eq!(json["contact"], "call <PHONE_NUMBER> now");
//! ```

pub mod error;
pub mod redact;
pub mod value;

pub use error::{RecordError, Result};
pub use redact::{RecordRedactor, DEFAULT_MAX_DEPTH};
pub use value::{Field, Value};
