// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Half-open character ranges and the span merger.
//!
//! A [`Span`] marks where a match occurred within some source text (a title
//! or a single line). Spans accumulate one-per-occurrence during aggregation
//! and are only coalesced at the presentation layer: [`merge_spans`] never
//! feeds back into match counting.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` within some specific text.
///
/// Spans produced from a single token occurrence always satisfy
/// `end = start + surface_len`. Both bounds fall on token boundaries, so a
/// span never splits a UTF-8 code point.
///
/// **Invariant**: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span covering `[start, end)`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Span { start, end }
    }

    /// Byte length of the covered range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether two spans overlap or touch (share an endpoint).
    ///
    /// Touching counts: `[0, 3)` and `[3, 5)` describe one contiguous region
    /// and merge into `[0, 5)`.
    #[inline]
    pub fn touches(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Coalesce overlapping and adjacent spans into canonical non-overlapping form.
///
/// Sorts by `(start, end)` and folds in a single scan: a span whose start is
/// `<=` the current merged span's end extends it (end grows to the max), a
/// gap emits the merged span and starts a new one. Output is sorted and
/// pairwise disjoint.
///
/// Idempotent, and independent of the input order. This is a
/// presentation-layer transform: it must never be used to recompute a
/// result's `match_count`.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    if spans.is_empty() {
        return Vec::new();
    }

    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];
    for span in &sorted[1..] {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = *span;
        }
    }
    merged.push(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty() {
        assert!(merge_spans(&[]).is_empty());
    }

    #[test]
    fn test_merge_single() {
        let spans = vec![Span::new(3, 7)];
        assert_eq!(merge_spans(&spans), spans);
    }

    #[test]
    fn test_merge_overlapping() {
        let spans = vec![Span::new(7, 11), Span::new(9, 15)];
        assert_eq!(merge_spans(&spans), vec![Span::new(7, 15)]);
    }

    #[test]
    fn test_merge_adjacent() {
        // Touching endpoints describe one contiguous region
        let spans = vec![Span::new(0, 3), Span::new(3, 5)];
        assert_eq!(merge_spans(&spans), vec![Span::new(0, 5)]);
    }

    #[test]
    fn test_merge_disjoint_preserved() {
        let spans = vec![Span::new(10, 12), Span::new(0, 4)];
        assert_eq!(merge_spans(&spans), vec![Span::new(0, 4), Span::new(10, 12)]);
    }

    #[test]
    fn test_merge_contained() {
        let spans = vec![Span::new(0, 10), Span::new(2, 5)];
        assert_eq!(merge_spans(&spans), vec![Span::new(0, 10)]);
    }

    #[test]
    fn test_merge_duplicates_collapse() {
        let spans = vec![Span::new(4, 8), Span::new(4, 8), Span::new(4, 8)];
        assert_eq!(merge_spans(&spans), vec![Span::new(4, 8)]);
    }

    #[test]
    fn test_merge_idempotent() {
        let spans = vec![Span::new(7, 11), Span::new(9, 15), Span::new(20, 22)];
        let once = merge_spans(&spans);
        let twice = merge_spans(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_order_independent() {
        let forward = vec![Span::new(0, 2), Span::new(1, 5), Span::new(9, 12)];
        let backward: Vec<Span> = forward.iter().rev().copied().collect();
        assert_eq!(merge_spans(&forward), merge_spans(&backward));
    }

    #[test]
    fn test_touches() {
        assert!(Span::new(0, 3).touches(&Span::new(3, 5)));
        assert!(Span::new(2, 6).touches(&Span::new(4, 9)));
        assert!(!Span::new(0, 3).touches(&Span::new(4, 5)));
    }
}
