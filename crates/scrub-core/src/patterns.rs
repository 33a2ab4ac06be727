//! Detection patterns for the built-in entity categories.
//!
//! Commonregex-lineage patterns, restricted to constructs the `regex` crate
//! supports (no look-around, no back-references). Overlap between categories
//! is expected and deliberate: a SHA-256 digest contains two MD5-shaped runs,
//! a credit card number contains a phone-shaped run, and so on. The interval
//! resolver sorts that out, so the patterns stay simple.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: &str = "(?:jan\\.?|january|feb\\.?|february|mar\\.?|march|apr\\.?|april|may\
|jun\\.?|june|jul\\.?|july|aug\\.?|august|sep\\.?|september|oct\\.?|october\
|nov\\.?|november|dec\\.?|december)";

pub(crate) static RE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:(?:[0-3]?\d(?:st|nd|rd|th)?\s+(?:of\s+)?{m}|{m}\s+[0-3]?\d(?:st|nd|rd|th)?)(?:\s*,?\s*\d{{4}})?|[0-3]?\d[-/.][0-3]?\d[-/.]\d{{2,4}})",
        m = MONTHS
    ))
    .unwrap()
});

pub(crate) static RE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\d{1,2}:\d{2}(?::\d{2})?(?:\s?[ap]\.?m\.?)?|\d{1,2}\s?[ap]\.?m\.?)")
        .unwrap()
});

pub(crate) static RE_CREDIT_CARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\d{4}[- ]?){3}\d{4}|\d{15,16}").unwrap());

/// North-American numbers with optional country code, area code and
/// extension suffix.
pub(crate) static RE_PHONE_WITH_EXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:\+?1\s*(?:[.-]\s*)?)?(?:\(\s*(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])\s*\)|(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9]))\s*(?:[.-]\s*)?)?(?:[2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})\s*(?:[.-]\s*)?[0-9]{4}(?:\s*(?:#|x\.?|ext\.?|extension)\s*\d+)?",
    )
    .unwrap()
});

/// General ten-digit numbers with optional country prefix and separators.
pub(crate) static RE_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-. ]?)?(?:\(\d{3}\)[-. ]?|\d{3}[-. ]?)\d{3}[-. ]?\d{4}").unwrap()
});

pub(crate) static RE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:https?://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d+)?(?:/(?:[^\s]*[^\s.,;:!?'")\]])?)?"#,
    )
    .unwrap()
});

/// Like [`RE_LINK`] but with a mandatory scheme, so that only unambiguous
/// URLs qualify.
pub(crate) static RE_STRICT_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)https?://(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d+)?(?:/(?:[^\s]*[^\s.,;:!?'")\]])?)?"#,
    )
    .unwrap()
});

pub(crate) static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}").unwrap());

pub(crate) static RE_IP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
    )
    .unwrap()
});

/// Port numbers in 1024-65535.
pub(crate) static RE_UNKNOWN_PORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"6[0-5]{2}[0-3][0-5]|[1-5]\d{4}|[2-9]\d{3}|1[1-9]\d{2}|10[3-9]\d|102[4-9]")
        .unwrap()
});

pub(crate) static RE_BTC_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b").unwrap());

pub(crate) static RE_STREET_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d{1,4}\s+[\w\s]{1,20}(?:street|st|avenue|ave|road|rd|highway|hwy|square|sq|trail|trl|drive|dr|court|ct|parkway|pkwy|circle|cir|boulevard|blvd)\b\.?",
    )
    .unwrap()
});

pub(crate) static RE_ZIP_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{5}(?:[-\s]\d{4})?\b").unwrap());

pub(crate) static RE_PO_BOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)p\.? ?o\.?\s*box\s+\d+").unwrap());

// No word boundaries: SSNs show up glued to surrounding prose.
pub(crate) static RE_SSN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3}-\d{2}-\d{4}").unwrap());

pub(crate) static RE_MD5_HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9a-fA-F]{32}").unwrap());

pub(crate) static RE_SHA1_HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9a-fA-F]{40}").unwrap());

pub(crate) static RE_SHA256_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9a-fA-F]{64}").unwrap());

pub(crate) static RE_GUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .unwrap()
});

pub(crate) static RE_ISBN10: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\d-?){9}[\dxX]").unwrap());

pub(crate) static RE_ISBN13: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\d-?){12}[\dxX]").unwrap());

pub(crate) static RE_MAC_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[0-9a-fA-F]{2}[:-]){5}[0-9a-fA-F]{2}").unwrap());

pub(crate) static RE_IBAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2}\d{2}[A-Z0-9]{11,30}\b").unwrap());

pub(crate) static RE_GIT_REPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:git|ssh|https?|git@[\w.]+):(?://)?[\w.@:/~-]+\.git/?").unwrap());
