//! Error types for structural redaction.

use thiserror::Error;

/// Errors produced while redacting a value tree.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A string leaf failed to scrub; the engine error is passed through
    /// unchanged.
    #[error(transparent)]
    Scrub(#[from] scrub_core::ScrubError),

    /// The value tree nests deeper than the configured limit.
    #[error("value tree exceeds maximum depth {limit}")]
    DepthExceeded { limit: usize },
}

/// Convenience alias for structural redaction results.
pub type Result<T> = std::result::Result<T, RecordError>;
