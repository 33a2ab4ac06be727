//! Error types for the scrubbing engine.

use thiserror::Error;

use crate::entity::Entity;

/// Errors that can occur while building or running a scrubber.
#[derive(Error, Debug)]
pub enum ScrubError {
    /// Per-entity masking policy failed validation.
    #[error("invalid config for entity '{entity}': {reason}")]
    InvalidEntityConfig { entity: Entity, reason: String },

    /// Engine-level configuration failed validation.
    #[error("invalid scrub config: {0}")]
    InvalidConfig(String),

    /// A blacklisted or ignored entity has no matcher registered.
    #[error("no matcher registered for entity '{0}'")]
    UnknownEntity(Entity),

    /// An entity selected for scrubbing has no masking config available.
    #[error("no masking config for entity '{0}'")]
    MissingEntityConfig(Entity),

    /// A matcher produced a span that is empty or out of bounds.
    #[error("matcher for entity '{entity}' returned invalid span {start}..{end}")]
    InvalidMatch {
        entity: Entity,
        start: usize,
        end: usize,
    },

    /// I/O error loading or saving a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A scrub worker panicked mid-batch.
    #[error("scrub worker panicked")]
    WorkerPanicked,
}

/// Result type alias for scrubbing operations.
pub type Result<T> = std::result::Result<T, ScrubError>;
