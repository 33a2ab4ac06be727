//! The matcher trait, its regex-backed implementation, and the stock
//! masking rule.

use regex::Regex;

use crate::config::EntityConfig;

/// Mask character used if an unvalidated policy reaches masking.
const FALLBACK_MASK: char = '*';

/// Half-open byte interval `[start, end)` into an input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `pos` lies inside the interval.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// A pluggable detector and masker for one entity category.
///
/// Implementations must be stateless with respect to individual texts: the
/// engine shares them across scrub workers as `Arc<dyn EntityMatcher>`.
pub trait EntityMatcher: Send + Sync {
    /// All candidate spans in `text`, as byte offsets. Spans need not be
    /// sorted or disjoint; overlap resolution happens later.
    fn find_matches(&self, text: &str) -> Vec<Span>;

    /// Produces the redacted bytes for one detected span.
    ///
    /// The default implementation delegates to [`default_mask`].
    fn mask(&self, detected: &[u8], config: &EntityConfig) -> Vec<u8> {
        default_mask(detected, config)
    }
}

/// Regex-backed matcher. Some categories union several patterns; matches
/// from all of them are reported together.
pub struct RegexMatcher {
    patterns: Vec<Regex>,
}

impl RegexMatcher {
    pub fn new(pattern: Regex) -> Self {
        RegexMatcher {
            patterns: vec![pattern],
        }
    }

    pub fn with_patterns(patterns: Vec<Regex>) -> Self {
        RegexMatcher { patterns }
    }
}

impl EntityMatcher for RegexMatcher {
    fn find_matches(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for pattern in &self.patterns {
            spans.extend(
                pattern
                    .find_iter(text)
                    .map(|m| Span::new(m.start(), m.end())),
            );
        }
        spans
    }
}

/// The stock masking rule, shared by the built-in matchers and available to
/// custom [`EntityMatcher`] implementations.
///
/// A configured replacement string is emitted verbatim for the whole span.
/// Otherwise every byte is overwritten with the mask character, keeping
/// `unmasked_prefix` leading and `unmasked_suffix` trailing bytes visible.
/// Offsets that meet or exceed the span length mask the entire span rather
/// than leaving extra bytes visible.
pub fn default_mask(detected: &[u8], config: &EntityConfig) -> Vec<u8> {
    if let Some(replacement) = &config.replace_with {
        return replacement.as_bytes().to_vec();
    }

    let mut buf = [0u8; 4];
    let mask = config
        .mask_with_char
        .unwrap_or(FALLBACK_MASK)
        .encode_utf8(&mut buf)
        .as_bytes();

    let len = detected.len();
    let prefix = config.unmasked_prefix.min(len);
    let suffix = config.unmasked_suffix.min(len);
    if prefix + suffix >= len {
        let mut out = Vec::with_capacity(len * mask.len());
        for _ in 0..len {
            out.extend_from_slice(mask);
        }
        return out;
    }

    let mut out = Vec::with_capacity(prefix + suffix + (len - prefix - suffix) * mask.len());
    out.extend_from_slice(&detected[..prefix]);
    for _ in 0..len - prefix - suffix {
        out.extend_from_slice(mask);
    }
    out.extend_from_slice(&detected[len - suffix..]);
    out
}
