//! Built-in matcher and default-placeholder tables.
//!
//! Plain map lookups keyed by [`Entity`]; custom matchers registered at
//! engine construction shadow these entries.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EntityConfig;
use crate::entity::Entity;
use crate::matcher::{EntityMatcher, RegexMatcher};
use crate::patterns;

static BUILTIN_MATCHERS: Lazy<HashMap<Entity, Arc<dyn EntityMatcher>>> = Lazy::new(|| {
    fn single(pattern: &Regex) -> Arc<dyn EntityMatcher> {
        Arc::new(RegexMatcher::new(pattern.clone()))
    }

    let mut table: HashMap<Entity, Arc<dyn EntityMatcher>> = HashMap::new();
    table.insert(Entity::DATE, single(&patterns::RE_DATE));
    table.insert(Entity::TIME, single(&patterns::RE_TIME));
    table.insert(Entity::CREDIT_CARD, single(&patterns::RE_CREDIT_CARD));
    table.insert(
        Entity::PHONE,
        Arc::new(RegexMatcher::with_patterns(vec![
            patterns::RE_PHONE_WITH_EXT.clone(),
            patterns::RE_PHONE.clone(),
        ])),
    );
    table.insert(Entity::LINK, single(&patterns::RE_LINK));
    table.insert(Entity::EMAIL, single(&patterns::RE_EMAIL));
    table.insert(Entity::IP, single(&patterns::RE_IP));
    table.insert(Entity::UNKNOWN_PORT, single(&patterns::RE_UNKNOWN_PORT));
    table.insert(Entity::BTC_ADDRESS, single(&patterns::RE_BTC_ADDRESS));
    table.insert(Entity::STREET_ADDRESS, single(&patterns::RE_STREET_ADDRESS));
    table.insert(Entity::ZIP_CODE, single(&patterns::RE_ZIP_CODE));
    table.insert(Entity::PO_BOX, single(&patterns::RE_PO_BOX));
    table.insert(Entity::SSN, single(&patterns::RE_SSN));
    table.insert(Entity::MD5_HEX, single(&patterns::RE_MD5_HEX));
    table.insert(Entity::SHA1_HEX, single(&patterns::RE_SHA1_HEX));
    table.insert(Entity::SHA256_HEX, single(&patterns::RE_SHA256_HEX));
    table.insert(Entity::GUID, single(&patterns::RE_GUID));
    table.insert(
        Entity::ISBN,
        Arc::new(RegexMatcher::with_patterns(vec![
            patterns::RE_ISBN13.clone(),
            patterns::RE_ISBN10.clone(),
        ])),
    );
    table.insert(Entity::MAC_ADDRESS, single(&patterns::RE_MAC_ADDRESS));
    table.insert(Entity::IBAN, single(&patterns::RE_IBAN));
    table.insert(Entity::GIT_REPO, single(&patterns::RE_GIT_REPO));
    table.insert(Entity::STRICT_LINK, single(&patterns::RE_STRICT_LINK));
    table
});

static BUILTIN_CONFIGS: Lazy<HashMap<Entity, EntityConfig>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(Entity::DATE, EntityConfig::replace("<DATE>"));
    table.insert(Entity::TIME, EntityConfig::replace("<TIME>"));
    table.insert(Entity::CREDIT_CARD, EntityConfig::replace("<CREDIT_CARD>"));
    table.insert(Entity::PHONE, EntityConfig::replace("<PHONE_NUMBER>"));
    table.insert(Entity::LINK, EntityConfig::replace("<LINK>"));
    table.insert(Entity::EMAIL, EntityConfig::replace("<EMAIL_ADDRESS>"));
    table.insert(Entity::IP, EntityConfig::replace("<IP>"));
    table.insert(
        Entity::UNKNOWN_PORT,
        EntityConfig::replace("<NOT_KNOWN_PORT>"),
    );
    table.insert(
        Entity::BTC_ADDRESS,
        EntityConfig::replace("<BITCOIN_ADDRESS>"),
    );
    table.insert(
        Entity::STREET_ADDRESS,
        EntityConfig::replace("<STREET_ADDRESS>"),
    );
    table.insert(Entity::ZIP_CODE, EntityConfig::replace("<ZIP_CODE>"));
    table.insert(Entity::PO_BOX, EntityConfig::replace("<PO_BOX>"));
    table.insert(Entity::SSN, EntityConfig::replace("<US_SSN>"));
    table.insert(Entity::MD5_HEX, EntityConfig::replace("<MD5_HEX>"));
    table.insert(Entity::SHA1_HEX, EntityConfig::replace("<SHA1_HEX>"));
    table.insert(Entity::SHA256_HEX, EntityConfig::replace("<SHA_256_HEX>"));
    table.insert(Entity::GUID, EntityConfig::replace("<GUID>"));
    table.insert(Entity::ISBN, EntityConfig::replace("<ISBN>"));
    table.insert(Entity::MAC_ADDRESS, EntityConfig::replace("<MAC_ADDRESS>"));
    table.insert(Entity::IBAN, EntityConfig::replace("<IBAN>"));
    table.insert(Entity::GIT_REPO, EntityConfig::replace("<GIT_REPO>"));
    table.insert(Entity::STRICT_LINK, EntityConfig::replace("<STRICT_LINK>"));
    table
});

/// Built-in matcher for `entity`, if there is one.
pub fn builtin_matcher(entity: &Entity) -> Option<Arc<dyn EntityMatcher>> {
    BUILTIN_MATCHERS.get(entity).cloned()
}

/// Built-in placeholder policy for `entity`, if there is one.
pub fn builtin_config(entity: &Entity) -> Option<EntityConfig> {
    BUILTIN_CONFIGS.get(entity).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_matcher_has_a_config() {
        for entity in BUILTIN_MATCHERS.keys() {
            let config = builtin_config(entity)
                .unwrap_or_else(|| panic!("missing default config for {entity}"));
            config
                .validate(entity)
                .unwrap_or_else(|err| panic!("invalid default config for {entity}: {err}"));
        }
        assert_eq!(BUILTIN_MATCHERS.len(), BUILTIN_CONFIGS.len());
        assert_eq!(BUILTIN_MATCHERS.len(), 22);
    }

    #[test]
    fn unknown_entities_resolve_to_nothing() {
        let custom = Entity::new("COMPANY_NAME");
        assert!(builtin_matcher(&custom).is_none());
        assert!(builtin_config(&custom).is_none());
    }

    #[test]
    fn placeholders_follow_the_category_names() {
        assert_eq!(
            builtin_config(&Entity::EMAIL).unwrap().replace_with,
            Some("<EMAIL_ADDRESS>".into())
        );
        assert_eq!(
            builtin_config(&Entity::SSN).unwrap().replace_with,
            Some("<US_SSN>".into())
        );
        assert_eq!(
            builtin_config(&Entity::UNKNOWN_PORT).unwrap().replace_with,
            Some("<NOT_KNOWN_PORT>".into())
        );
    }
}
