//! End-to-end tests for structural redaction.
//!
//! These tests verify:
//! - Tagged subtrees are scrubbed while untagged siblings are copied as-is
//! - The redaction flag inherits downward and never clears
//! - Mapping keys and non-string leaves survive redaction untouched
//! - Absent references pass through without error
//! - Scrub failures abort the walk with no partial tree
//! - Parsed JSON payloads round-trip through tagging and redaction

use std::collections::HashMap;
use std::sync::Arc;

use scrub_core::{
    Entity, EntityConfig, EntityMatcher, ScrubConfig, ScrubError, Scrubber, Span,
};
use scrub_record::{Field, RecordError, RecordRedactor, Value};

fn stock() -> Scrubber {
    Scrubber::new(ScrubConfig::default()).expect("stock config must build")
}

fn field<'a>(value: &'a Value, name: &str) -> &'a Value {
    let Value::Record(fields) = value else {
        panic!("expected a record, got {value:?}");
    };
    &fields
        .iter()
        .find(|field| field.name == name)
        .unwrap_or_else(|| panic!("no field named {name}"))
        .value
}

// ============================================================================
// Tag Semantics
// ============================================================================

#[test]
fn test_only_tagged_subtrees_are_scrubbed() {
    let scrubber = stock();
    let tree = Value::Record(vec![
        Field::new("id", Value::Int(7)),
        Field::new("note", Value::text("ssn 488-23-3729 stays put")),
        Field::redacted(
            "profile",
            Value::Record(vec![
                Field::new("ssn", Value::text("488-23-3729")),
                Field::new("age", Value::Int(44)),
                Field::new(
                    "emails",
                    Value::List(vec![
                        Value::text("morgan.lee@example.com"),
                        Value::text("casey.park@example.com"),
                    ]),
                ),
            ]),
        ),
    ]);

    let redacted = RecordRedactor::new(&scrubber).redact(&tree).unwrap();

    assert_eq!(field(&redacted, "id"), &Value::Int(7));
    assert_eq!(
        field(&redacted, "note"),
        &Value::text("ssn 488-23-3729 stays put")
    );

    let profile = field(&redacted, "profile");
    assert_eq!(field(profile, "ssn"), &Value::text("<US_SSN>"));
    assert_eq!(field(profile, "age"), &Value::Int(44));
    assert_eq!(
        field(profile, "emails"),
        &Value::List(vec![
            Value::text("<EMAIL_ADDRESS>"),
            Value::text("<EMAIL_ADDRESS>"),
        ])
    );
}

#[test]
fn test_mapping_keys_survive_while_values_are_scrubbed() {
    let scrubber = stock();
    let tree = Value::Record(vec![Field::redacted(
        "contacts",
        Value::Mapping(vec![(
            Value::text("casey.park@example.com"),
            Value::text("reach morgan.lee@example.com"),
        )]),
    )]);

    let redacted = RecordRedactor::new(&scrubber).redact(&tree).unwrap();
    assert_eq!(
        field(&redacted, "contacts"),
        &Value::Mapping(vec![(
            Value::text("casey.park@example.com"),
            Value::text("reach <EMAIL_ADDRESS>"),
        )])
    );
}

#[test]
fn test_absent_reference_passes_through() {
    let scrubber = stock();
    let tree = Value::Record(vec![
        Field::redacted("primary", Value::some(Value::text("morgan.lee@example.com"))),
        Field::redacted("secondary", Value::NONE),
    ]);

    let redacted = RecordRedactor::new(&scrubber).redact(&tree).unwrap();
    assert_eq!(
        field(&redacted, "primary"),
        &Value::some(Value::text("<EMAIL_ADDRESS>"))
    );
    assert_eq!(field(&redacted, "secondary"), &Value::NONE);
}

#[test]
fn test_untagged_tree_is_a_plain_deep_copy() {
    let scrubber = stock();
    let tree = Value::Record(vec![
        Field::new("email", Value::text("morgan.lee@example.com")),
        Field::new("scores", Value::List(vec![Value::Float(2.5), Value::Int(-3)])),
        Field::new("flags", Value::Mapping(vec![(Value::Int(1), Value::Bool(true))])),
        Field::new("parent", Value::NONE),
    ]);

    let redacted = RecordRedactor::new(&scrubber).redact(&tree).unwrap();
    assert_eq!(redacted, tree);
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_scrub_failure_aborts_the_walk() {
    struct Degenerate;
    impl EntityMatcher for Degenerate {
        fn find_matches(&self, _text: &str) -> Vec<Span> {
            vec![Span::new(3, 3)]
        }
    }

    let entity = Entity::new("BROKEN");
    let mut config = ScrubConfig::empty();
    config.blacklisted_entities.push(entity.clone());
    config
        .entity_configs
        .insert(entity.clone(), EntityConfig::replace("<B>"));
    let mut custom: HashMap<Entity, Arc<dyn EntityMatcher>> = HashMap::new();
    custom.insert(entity, Arc::new(Degenerate));
    let scrubber = Scrubber::with_matchers(config, custom).unwrap();

    let tree = Value::Record(vec![Field::redacted("body", Value::text("some text"))]);
    let err = RecordRedactor::new(&scrubber).redact(&tree).unwrap_err();
    assert!(matches!(
        err,
        RecordError::Scrub(ScrubError::InvalidMatch { start: 3, end: 3, .. })
    ));
}

#[test]
fn test_deep_nesting_is_rejected_not_overflowed() {
    let scrubber = stock();
    let mut tree = Value::text("leaf");
    for _ in 0..300 {
        tree = Value::List(vec![tree]);
    }

    let err = RecordRedactor::new(&scrubber).redact(&tree).unwrap_err();
    assert!(matches!(err, RecordError::DepthExceeded { limit } if limit == scrub_record::DEFAULT_MAX_DEPTH));
}

// ============================================================================
// JSON Pipeline
// ============================================================================

#[test]
fn test_json_payload_round_trip() {
    let scrubber = stock();
    let payload = serde_json::json!({
        "ssn": "488-23-3729",
        "email": "morgan.lee@example.com",
        "count": 3,
        "ratio": 0.5,
        "active": true,
        "parent": null,
    });

    let record = Value::Record(vec![
        Field::new("kind", Value::text("user")),
        Field::redacted("payload", Value::from(payload)),
    ]);

    let redacted = RecordRedactor::new(&scrubber).redact(&record).unwrap();
    let json = serde_json::Value::from(redacted);

    assert_eq!(json["kind"], "user");
    assert_eq!(json["payload"]["ssn"], "<US_SSN>");
    assert_eq!(json["payload"]["email"], "<EMAIL_ADDRESS>");
    assert_eq!(json["payload"]["count"], 3);
    assert_eq!(json["payload"]["ratio"], 0.5);
    assert_eq!(json["payload"]["active"], true);
    assert_eq!(json["payload"]["parent"], serde_json::Value::Null);
}
