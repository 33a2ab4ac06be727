//! Overlap resolution between candidate spans.
//!
//! Candidates from every blacklisted category are pooled, ordered, and swept
//! left to right so that exactly one matcher wins each contested byte range.
//! Spans of ignored categories are applied afterwards as shields.

use std::fmt;

use crate::config::EntityConfig;
use crate::entity::Entity;
use crate::matcher::{EntityMatcher, Span};

/// A detected span tied to the entity and matcher that produced it.
#[derive(Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub span: Span,
    pub entity: &'a Entity,
    pub matcher: &'a dyn EntityMatcher,
    pub config: &'a EntityConfig,
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("span", &self.span)
            .field("entity", self.entity)
            .finish()
    }
}

/// Sorts by start ascending, ties by end descending so the longest span
/// comes first. The sort is stable: candidates sharing both endpoints keep
/// blacklist declaration order, which makes every tie deterministic.
pub(crate) fn sort_candidates(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });
}

/// Left-to-right sweep keeping the first candidate of every overlapping run.
///
/// Each candidate is compared against the last span actually kept. A span
/// that ends inside the kept one is dropped; a span overhanging its end
/// survives with its start pushed to one byte past the kept end, which can
/// leave the byte at the kept end unredacted and can shrink the tail to an
/// empty span. Both outcomes are intentional.
pub(crate) fn resolve_overlaps(sorted: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    let mut kept: Vec<Candidate<'_>> = Vec::with_capacity(sorted.len());
    for mut candidate in sorted {
        match kept.last() {
            Some(prev) if candidate.span.start <= prev.span.end => {
                if candidate.span.end <= prev.span.end {
                    continue;
                }
                candidate.span.start = prev.span.end + 1;
                kept.push(candidate);
            }
            _ => kept.push(candidate),
        }
    }
    kept
}

/// Removes candidates whose span starts inside any shield span.
///
/// Both `candidates` and `shields` must be sorted by start; the walk is a
/// single streaming join. Shield spans come straight from their matchers and
/// are never redacted themselves.
pub(crate) fn drop_protected<'a>(
    candidates: Vec<Candidate<'a>>,
    shields: &[Span],
) -> Vec<Candidate<'a>> {
    if shields.is_empty() {
        return candidates;
    }
    let mut kept = Vec::with_capacity(candidates.len());
    let mut i = 0;
    for candidate in candidates {
        while i < shields.len() && shields[i].end <= candidate.span.start {
            i += 1;
        }
        let shielded = i < shields.len() && shields[i].contains(candidate.span.start);
        if !shielded {
            kept.push(candidate);
        }
    }
    kept
}
