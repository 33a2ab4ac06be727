//! Deterministic, pattern-based PII scrubbing.
//!
//! This crate detects sensitive entities in free-form text with per-category
//! matchers and rewrites every surviving span according to that category's
//! masking policy.
//!
//! # Key Features
//!
//! - **Pluggable matchers**: each category implements [`EntityMatcher`];
//!   regex-backed matchers cover the built-in categories and callers can
//!   register their own, including shadowing a built-in.
//! - **Deterministic overlap resolution**: earlier-starting spans win, equal
//!   starts go to the longer span, contained matches are dropped and any
//!   overlapping tail is trimmed before masking.
//! - **Protected categories**: entities on the ignore list shield their
//!   spans, so a URL category can keep an embedded token from being mangled
//!   by a broader matcher.
//! - **Ordered batches**: a bounded worker pool scrubs many texts
//!   concurrently while keeping `output[i]` aligned with `texts[i]`; the
//!   whole batch fails on the first error.
//!
//! # Example
//!
//! ```
//! use scrub_core::{ScrubConfig, Scrubber};
//!
//! let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
//! let out = scrubber.scrub_text("call 9140520809 now").unwrap();
//! assert_eq!(out, "call <PHONE_NUMBER> now");
//! ```

pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod matcher;
pub mod registry;

mod patterns;
mod pool;
mod resolve;

pub use config::{EntityConfig, ScrubConfig, DEFAULT_WORKER_THREADS};
pub use engine::Scrubber;
pub use entity::Entity;
pub use error::{Result, ScrubError};
pub use matcher::{default_mask, EntityMatcher, RegexMatcher, Span};
