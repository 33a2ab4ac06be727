//! The recursive redactor.

use tracing::trace;

use scrub_core::Scrubber;

use crate::error::{RecordError, Result};
use crate::value::{Field, Value};

/// Default recursion depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Deep-copying redactor over [`Value`] trees.
///
/// The walk threads an inherited "under redaction" flag: once a record field
/// is tagged, every string leaf below it is scrubbed through the borrowed
/// engine. Untagged subtrees and non-string leaves are copied unchanged.
///
/// [`Value`] trees are acyclic by construction, so the walk always
/// terminates; the depth limit turns pathologically nested input (for
/// instance from parsed JSON) into [`RecordError::DepthExceeded`] instead of
/// a stack overflow.
pub struct RecordRedactor<'a> {
    scrubber: &'a Scrubber,
    max_depth: usize,
}

impl<'a> RecordRedactor<'a> {
    pub fn new(scrubber: &'a Scrubber) -> Self {
        RecordRedactor {
            scrubber,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Redactor with a custom recursion depth limit.
    pub fn with_max_depth(scrubber: &'a Scrubber, max_depth: usize) -> Self {
        RecordRedactor {
            scrubber,
            max_depth,
        }
    }

    /// Produces a redacted deep copy of `value`.
    ///
    /// The first scrub failure aborts the whole call; no partially redacted
    /// tree is returned.
    pub fn redact(&self, value: &Value) -> Result<Value> {
        trace!(max_depth = self.max_depth, "redacting value tree");
        self.walk(value, false, 0)
    }

    fn walk(&self, value: &Value, under_redaction: bool, depth: usize) -> Result<Value> {
        if depth >= self.max_depth {
            return Err(RecordError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let copied = match value {
            Value::Text(text) => {
                if under_redaction {
                    Value::Text(self.scrubber.scrub_text(text)?)
                } else {
                    Value::Text(text.clone())
                }
            }
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => value.clone(),
            Value::Record(fields) => {
                let mut copied = Vec::with_capacity(fields.len());
                for field in fields {
                    // The tag switches redaction on for the subtree; nothing
                    // below can switch it back off.
                    let flagged = under_redaction || field.redact;
                    copied.push(Field {
                        name: field.name.clone(),
                        redact: field.redact,
                        value: self.walk(&field.value, flagged, depth + 1)?,
                    });
                }
                Value::Record(copied)
            }
            Value::List(items) => {
                let mut copied = Vec::with_capacity(items.len());
                for item in items {
                    copied.push(self.walk(item, under_redaction, depth + 1)?);
                }
                Value::List(copied)
            }
            Value::Mapping(entries) => {
                let mut copied = Vec::with_capacity(entries.len());
                for (key, entry) in entries {
                    copied.push((key.clone(), self.walk(entry, under_redaction, depth + 1)?));
                }
                Value::Mapping(copied)
            }
            Value::Optional(inner) => match inner {
                Some(boxed) => Value::some(self.walk(boxed, under_redaction, depth + 1)?),
                None => Value::NONE,
            },
        };
        Ok(copied)
    }
}
