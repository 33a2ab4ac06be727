//! The scrubbing engine: construction-time validation, candidate
//! collection, and single-pass mask application.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{EntityConfig, ScrubConfig};
use crate::entity::Entity;
use crate::error::{Result, ScrubError};
use crate::matcher::{EntityMatcher, Span};
use crate::pool;
use crate::registry;
use crate::resolve::{self, Candidate};

/// Immutable scrubbing engine.
///
/// Built once from a [`ScrubConfig`] (plus optional custom matchers) and
/// shared freely across threads. All configuration checks happen here, so a
/// successfully constructed engine can only fail at scrub time on matcher
/// misbehavior.
pub struct Scrubber {
    blacklisted: Vec<(Entity, Arc<dyn EntityMatcher>, EntityConfig)>,
    ignored: Vec<(Entity, Arc<dyn EntityMatcher>)>,
    worker_threads: usize,
}

impl fmt::Debug for Scrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blacklisted: Vec<&Entity> =
            self.blacklisted.iter().map(|(entity, _, _)| entity).collect();
        let ignored: Vec<&Entity> = self.ignored.iter().map(|(entity, _)| entity).collect();
        f.debug_struct("Scrubber")
            .field("blacklisted", &blacklisted)
            .field("ignored", &ignored)
            .field("worker_threads", &self.worker_threads)
            .finish()
    }
}

impl Scrubber {
    /// Engine over the built-in matchers only.
    pub fn new(config: ScrubConfig) -> Result<Self> {
        Self::with_matchers(config, HashMap::new())
    }

    /// Engine with custom matchers registered. A custom entry for a built-in
    /// id shadows the stock matcher for that category.
    ///
    /// Construction fails if any selected category has no matcher, if any
    /// policy is malformed, or if a category has no masking policy: every
    /// custom-registered entity needs an explicit entry in `entity_configs`,
    /// even when it shadows a built-in.
    pub fn with_matchers(
        config: ScrubConfig,
        custom: HashMap<Entity, Arc<dyn EntityMatcher>>,
    ) -> Result<Self> {
        config.validate()?;
        for entity in custom.keys() {
            if !config.entity_configs.contains_key(entity) {
                return Err(ScrubError::MissingEntityConfig(entity.clone()));
            }
        }

        let lookup = |entity: &Entity| -> Result<Arc<dyn EntityMatcher>> {
            custom
                .get(entity)
                .cloned()
                .or_else(|| registry::builtin_matcher(entity))
                .ok_or_else(|| ScrubError::UnknownEntity(entity.clone()))
        };

        let mut blacklisted = Vec::with_capacity(config.blacklisted_entities.len());
        for entity in &config.blacklisted_entities {
            let matcher = lookup(entity)?;
            let effective = match config.entity_configs.get(entity) {
                Some(explicit) => explicit.clone(),
                None => registry::builtin_config(entity)
                    .ok_or_else(|| ScrubError::MissingEntityConfig(entity.clone()))?,
            };
            effective.validate(entity)?;
            blacklisted.push((entity.clone(), matcher, effective));
        }

        let mut ignored = Vec::with_capacity(config.ignored_entities.len());
        for entity in &config.ignored_entities {
            ignored.push((entity.clone(), lookup(entity)?));
        }

        debug!(
            blacklisted = blacklisted.len(),
            ignored = ignored.len(),
            workers = config.worker_threads,
            "scrubber ready"
        );

        Ok(Scrubber {
            blacklisted,
            ignored,
            worker_threads: config.worker_threads,
        })
    }

    /// Scrubs one text.
    ///
    /// Detection, overlap resolution and masking all work on byte offsets; a
    /// mask boundary can split a multibyte character, in which case the
    /// affected bytes are replaced with U+FFFD on output.
    pub fn scrub_text(&self, text: &str) -> Result<String> {
        let mut candidates = Vec::new();
        for (entity, matcher, config) in &self.blacklisted {
            for span in matcher.find_matches(text) {
                check_span(entity, span, text.len())?;
                candidates.push(Candidate {
                    span,
                    entity,
                    matcher: matcher.as_ref(),
                    config,
                });
            }
        }

        let mut shields = Vec::new();
        for (entity, matcher) in &self.ignored {
            for span in matcher.find_matches(text) {
                check_span(entity, span, text.len())?;
                shields.push(span);
            }
        }
        shields.sort_by_key(|span| span.start);

        resolve::sort_candidates(&mut candidates);
        let resolved = resolve::resolve_overlaps(candidates);
        let resolved = resolve::drop_protected(resolved, &shields);
        trace!(spans = resolved.len(), shields = shields.len(), "resolved");

        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut cursor = 0;
        for candidate in &resolved {
            out.extend_from_slice(&bytes[cursor..candidate.span.start]);
            let masked = candidate.matcher.mask(
                &bytes[candidate.span.start..candidate.span.end],
                candidate.config,
            );
            out.extend_from_slice(&masked);
            cursor = candidate.span.end;
        }
        out.extend_from_slice(&bytes[cursor..]);

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Scrubs a batch on the worker pool, preserving input order exactly:
    /// `output[i]` is the scrubbed `texts[i]`.
    ///
    /// The whole batch fails on the first error by input position; no
    /// partial output is returned.
    pub fn scrub_texts<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        debug!(
            texts = texts.len(),
            workers = self.worker_threads,
            "scrubbing batch"
        );
        pool::run_ordered(self.worker_threads, texts.len(), |index| {
            self.scrub_text(texts[index].as_ref())
        })
    }

    /// Number of worker threads used by [`scrub_texts`](Self::scrub_texts).
    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }
}

fn check_span(entity: &Entity, span: Span, len: usize) -> Result<()> {
    if span.start >= span.end || span.end > len {
        return Err(ScrubError::InvalidMatch {
            entity: entity.clone(),
            start: span.start,
            end: span.end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_scrubber_replaces_a_phone_number() {
        let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
        assert_eq!(
            scrubber.scrub_text("call 9140520809 now").unwrap(),
            "call <PHONE_NUMBER> now"
        );
    }

    #[test]
    fn empty_text_passes_through() {
        let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
        assert_eq!(scrubber.scrub_text("").unwrap(), "");
    }

    #[test]
    fn text_without_entities_is_untouched() {
        let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
        let text = "nothing sensitive in here, honestly";
        assert_eq!(scrubber.scrub_text(text).unwrap(), text);
    }

    #[test]
    fn unknown_blacklisted_entity_fails_construction() {
        let mut config = ScrubConfig::empty();
        config.blacklisted_entities.push(Entity::new("NO_SUCH"));
        let err = Scrubber::new(config).unwrap_err();
        assert!(matches!(err, ScrubError::UnknownEntity(entity) if entity.as_str() == "NO_SUCH"));
    }

    #[test]
    fn unknown_ignored_entity_fails_construction() {
        let mut config = ScrubConfig::empty();
        config.ignored_entities.push(Entity::new("NO_SUCH"));
        assert!(matches!(
            Scrubber::new(config),
            Err(ScrubError::UnknownEntity(_))
        ));
    }

    #[test]
    fn custom_entity_without_config_fails_construction() {
        struct Always;
        impl EntityMatcher for Always {
            fn find_matches(&self, _text: &str) -> Vec<Span> {
                vec![Span::new(0, 1)]
            }
        }

        let entity = Entity::new("COMPANY_NAME");
        let mut config = ScrubConfig::empty();
        config.blacklisted_entities.push(entity.clone());
        let mut custom: HashMap<Entity, Arc<dyn EntityMatcher>> = HashMap::new();
        custom.insert(entity, Arc::new(Always));

        let err = Scrubber::with_matchers(config, custom).unwrap_err();
        assert!(matches!(err, ScrubError::MissingEntityConfig(_)));
    }

    #[test]
    fn malformed_override_fails_construction() {
        let mut config = ScrubConfig::default();
        config
            .entity_configs
            .insert(Entity::EMAIL, EntityConfig::default());
        assert!(matches!(
            Scrubber::new(config),
            Err(ScrubError::InvalidEntityConfig { .. })
        ));
    }

    #[test]
    fn degenerate_match_fails_the_scrub() {
        struct Degenerate;
        impl EntityMatcher for Degenerate {
            fn find_matches(&self, _text: &str) -> Vec<Span> {
                vec![Span::new(5, 5)]
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
        let err = scrubber.scrub_text("some text here").unwrap_err();
        assert!(matches!(
            err,
            ScrubError::InvalidMatch { start: 5, end: 5, .. }
        ));
    }

    #[test]
    fn out_of_bounds_match_fails_the_scrub() {
        struct OutOfBounds;
        impl EntityMatcher for OutOfBounds {
            fn find_matches(&self, _text: &str) -> Vec<Span> {
                vec![Span::new(0, 999)]
            }
        }

        let entity = Entity::new("BROKEN");
        let mut config = ScrubConfig::empty();
        config.blacklisted_entities.push(entity.clone());
        config
            .entity_configs
            .insert(entity.clone(), EntityConfig::replace("<B>"));
        let mut custom: HashMap<Entity, Arc<dyn EntityMatcher>> = HashMap::new();
        custom.insert(entity, Arc::new(OutOfBounds));

        let scrubber = Scrubber::with_matchers(config, custom).unwrap();
        assert!(matches!(
            scrubber.scrub_text("short").unwrap_err(),
            ScrubError::InvalidMatch { .. }
        ));
    }

    #[test]
    fn unicode_around_matches_survives() {
        let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
        assert_eq!(
            scrubber.scrub_text("prénom ☎ 9140520809 voilà").unwrap(),
            "prénom ☎ <PHONE_NUMBER> voilà"
        );
    }

    #[test]
    fn worker_threads_reports_the_configured_count() {
        let mut config = ScrubConfig::default();
        config.worker_threads = 2;
        let scrubber = Scrubber::new(config).unwrap();
        assert_eq!(scrubber.worker_threads(), 2);

        let stock = Scrubber::new(ScrubConfig::default()).unwrap();
        assert_eq!(
            stock.worker_threads(),
            crate::config::DEFAULT_WORKER_THREADS
        );
    }

    #[test]
    fn debug_output_lists_the_selected_categories() {
        let scrubber = Scrubber::new(ScrubConfig::default()).unwrap();
        let rendered = format!("{scrubber:?}");
        assert!(rendered.contains("CREDIT_CARD"));
        assert!(rendered.contains("STRICT_LINK"));
        assert!(rendered.contains("worker_threads"));
    }
}
