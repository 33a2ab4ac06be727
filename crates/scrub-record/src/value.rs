//! An owned, explicitly tagged representation of nested record data.
//!
//! The redactor never inspects runtime types: callers describe their data as
//! a [`Value`] tree, marking sensitive record fields with [`Field::redacted`].
//! Conversions to and from `serde_json::Value` cover the common case of
//! redacting parsed JSON payloads.

/// One field of a [`Value::Record`], carrying the redaction tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Marks the field's subtree as sensitive. The tag is inherited by every
    /// descendant and cannot be cleared further down.
    pub redact: bool,
    pub value: Value,
}

impl Field {
    /// An untagged field.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Field {
            name: name.into(),
            redact: false,
            value,
        }
    }

    /// A field whose subtree is scrubbed.
    pub fn redacted(name: impl Into<String>, value: Value) -> Self {
        Field {
            name: name.into(),
            redact: true,
            value,
        }
    }
}

/// An owned value tree.
///
/// Mappings use a pair vector rather than a hash map so that keys are not
/// required to be hashable and entry order survives the round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String leaf; the only shape that is ever rewritten.
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Aggregate with named, individually taggable fields.
    Record(Vec<Field>),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Keyed mapping. Keys are values themselves but are copied verbatim;
    /// only the entry values are walked.
    Mapping(Vec<(Value, Value)>),
    /// Nil-able reference.
    Optional(Option<Box<Value>>),
}

impl Value {
    /// The absent reference.
    pub const NONE: Value = Value::Optional(None);

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// A present reference.
    pub fn some(value: Value) -> Self {
        Value::Optional(Some(Box::new(value)))
    }
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::NONE,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Record(
                entries
                    .into_iter()
                    .map(|(name, value)| Field::new(name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(text) => serde_json::Value::String(text),
            Value::Int(int) => serde_json::Value::Number(int.into()),
            Value::Float(float) => serde_json::Number::from_f64(float)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(flag) => serde_json::Value::Bool(flag),
            Value::Record(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|field| (field.name, serde_json::Value::from(field.value)))
                    .collect(),
            ),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Mapping(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key_string(key), serde_json::Value::from(value)))
                    .collect(),
            ),
            Value::Optional(inner) => match inner {
                Some(boxed) => serde_json::Value::from(*boxed),
                None => serde_json::Value::Null,
            },
        }
    }
}

/// JSON object keys must be strings; text keys pass through and everything
/// else uses its JSON encoding.
fn key_string(key: Value) -> String {
    match key {
        Value::Text(text) => text,
        other => serde_json::Value::from(other).to_string(),
    }
}
