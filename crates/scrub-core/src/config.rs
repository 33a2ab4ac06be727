//! Engine configuration: per-entity masking policies and the scrub config.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{Result, ScrubError};

/// Default number of worker threads for batch scrubbing.
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Masking policy for a single entity category.
///
/// Exactly one of `replace_with` / `mask_with_char` must be set. The offset
/// fields carve visible bytes out of the edges of a masked span and are only
/// meaningful together with `mask_with_char`; combining them with
/// `replace_with` is rejected rather than silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Replacement text emitted verbatim for the whole span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_with: Option<String>,
    /// Character used to overwrite masked bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_with_char: Option<char>,
    /// Leading bytes left visible when masking.
    #[serde(default)]
    pub unmasked_prefix: usize,
    /// Trailing bytes left visible when masking.
    #[serde(default)]
    pub unmasked_suffix: usize,
}

impl EntityConfig {
    /// Policy that replaces the whole span with `text`.
    pub fn replace(text: impl Into<String>) -> Self {
        EntityConfig {
            replace_with: Some(text.into()),
            ..Default::default()
        }
    }

    /// Policy that overwrites every byte of the span with `mask`.
    pub fn mask(mask: char) -> Self {
        EntityConfig {
            mask_with_char: Some(mask),
            ..Default::default()
        }
    }

    /// Like [`mask`](Self::mask), but leaving `prefix` leading and `suffix`
    /// trailing bytes of the span visible.
    pub fn mask_keeping(mask: char, prefix: usize, suffix: usize) -> Self {
        EntityConfig {
            mask_with_char: Some(mask),
            unmasked_prefix: prefix,
            unmasked_suffix: suffix,
            ..Default::default()
        }
    }

    /// Checks that the policy is well formed for `entity`.
    pub fn validate(&self, entity: &Entity) -> Result<()> {
        match (&self.replace_with, &self.mask_with_char) {
            (Some(_), Some(_)) => Err(ScrubError::InvalidEntityConfig {
                entity: entity.clone(),
                reason: "replace_with and mask_with_char are mutually exclusive".into(),
            }),
            (None, None) => Err(ScrubError::InvalidEntityConfig {
                entity: entity.clone(),
                reason: "one of replace_with or mask_with_char is required".into(),
            }),
            (Some(_), None) if self.unmasked_prefix != 0 || self.unmasked_suffix != 0 => {
                Err(ScrubError::InvalidEntityConfig {
                    entity: entity.clone(),
                    reason: "unmasked offsets require mask_with_char".into(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Configuration for a scrubbing engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Categories whose detections are redacted.
    #[serde(default)]
    pub blacklisted_entities: Vec<Entity>,
    /// Categories whose detections shield their span from redaction. Never
    /// redacted themselves.
    #[serde(default)]
    pub ignored_entities: Vec<Entity>,
    /// Per-category policy overrides. Categories absent here fall back to the
    /// built-in placeholder configs.
    #[serde(default)]
    pub entity_configs: HashMap<Entity, EntityConfig>,
    /// Worker threads used for batch scrubbing.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

fn default_worker_threads() -> usize {
    DEFAULT_WORKER_THREADS
}

impl Default for ScrubConfig {
    /// The stock scrubber: common contact, financial and identifier
    /// categories redacted, URL and git-remote spans shielded.
    fn default() -> Self {
        ScrubConfig {
            blacklisted_entities: vec![
                Entity::STREET_ADDRESS,
                Entity::CREDIT_CARD,
                Entity::PHONE,
                Entity::EMAIL,
                Entity::IP,
                Entity::ZIP_CODE,
                Entity::PO_BOX,
                Entity::SSN,
                Entity::ISBN,
                Entity::MAC_ADDRESS,
                Entity::IBAN,
            ],
            ignored_entities: vec![Entity::STRICT_LINK, Entity::GIT_REPO],
            entity_configs: HashMap::new(),
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }
}

impl ScrubConfig {
    /// Configuration with no categories selected, as a starting point for
    /// fully custom setups.
    pub fn empty() -> Self {
        ScrubConfig {
            blacklisted_entities: Vec::new(),
            ignored_entities: Vec::new(),
            entity_configs: HashMap::new(),
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: ScrubConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Semantic validation: override policies well formed, at least one
    /// worker, no category both blacklisted and ignored.
    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == 0 {
            return Err(ScrubError::InvalidConfig(
                "worker_threads must be at least 1".into(),
            ));
        }
        for (entity, config) in &self.entity_configs {
            config.validate(entity)?;
        }
        for entity in &self.ignored_entities {
            if self.blacklisted_entities.contains(entity) {
                return Err(ScrubError::InvalidConfig(format!(
                    "entity '{entity}' is both blacklisted and ignored"
                )));
            }
        }
        Ok(())
    }
}
