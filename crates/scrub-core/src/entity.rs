//! Redaction categories.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a redaction category.
///
/// Categories are open-ended strings: the constants below cover the built-in
/// detectors, and any other id can be paired with a custom matcher when the
/// engine is constructed. Identity is exact, case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Cow<'static, str>);

impl Entity {
    pub const DATE: Entity = Entity::borrowed("DATE");
    pub const TIME: Entity = Entity::borrowed("TIME");
    pub const CREDIT_CARD: Entity = Entity::borrowed("CREDIT_CARD");
    pub const PHONE: Entity = Entity::borrowed("PHONE");
    /// URLs, scheme optional.
    pub const LINK: Entity = Entity::borrowed("LINK");
    pub const EMAIL: Entity = Entity::borrowed("EMAIL");
    pub const IP: Entity = Entity::borrowed("IP");
    /// Port numbers above the well-known range (1024-65535).
    pub const UNKNOWN_PORT: Entity = Entity::borrowed("UNKNOWN_PORT");
    pub const BTC_ADDRESS: Entity = Entity::borrowed("BTC_ADDRESS");
    pub const STREET_ADDRESS: Entity = Entity::borrowed("STREET_ADDRESS");
    pub const ZIP_CODE: Entity = Entity::borrowed("ZIP_CODE");
    pub const PO_BOX: Entity = Entity::borrowed("PO_BOX");
    /// US social security numbers.
    pub const SSN: Entity = Entity::borrowed("SSN");
    pub const MD5_HEX: Entity = Entity::borrowed("MD5_HEX");
    pub const SHA1_HEX: Entity = Entity::borrowed("SHA1_HEX");
    pub const SHA256_HEX: Entity = Entity::borrowed("SHA256_HEX");
    pub const GUID: Entity = Entity::borrowed("GUID");
    pub const ISBN: Entity = Entity::borrowed("ISBN");
    pub const MAC_ADDRESS: Entity = Entity::borrowed("MAC_ADDRESS");
    pub const IBAN: Entity = Entity::borrowed("IBAN");
    /// Git remote URLs. Part of the stock ignored set.
    pub const GIT_REPO: Entity = Entity::borrowed("GIT_REPO");
    /// URLs with a mandatory scheme. Part of the stock ignored set, where it
    /// shields URL contents (path segments often embed other entities) from
    /// redaction.
    pub const STRICT_LINK: Entity = Entity::borrowed("STRICT_LINK");

    const fn borrowed(id: &'static str) -> Self {
        Entity(Cow::Borrowed(id))
    }

    /// Category with an arbitrary id, for use with custom matchers.
    pub fn new(id: impl Into<String>) -> Self {
        Entity(Cow::Owned(id.into()))
    }

    /// The category id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Entity {
    fn from(id: &str) -> Self {
        Entity::new(id)
    }
}

impl From<String> for Entity {
    fn from(id: String) -> Self {
        Entity(Cow::Owned(id))
    }
}

impl AsRef<str> for Entity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
