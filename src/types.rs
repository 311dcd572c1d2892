// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! These types define how documents, postings, and per-document results fit
//! together. Offsets everywhere are **byte offsets** into the source string
//! they belong to (the full title, or one line), so that
//! `text[span.start..span.end]` is always the matched surface text.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Posting**: `offset + surface_len <= source.len()` for the source text
//!   named by `location`. Every posting points at a real token.
//! - **SearchResult**: `match_count = title_spans.len() + Σ line spans`
//!   before any presentation-layer span merging. [`SearchResult::combine`]
//!   preserves this; the renderer's merging never feeds back into it.
//! - **LineMatch**: `line_no` is 1-based; `text` is the verbatim line.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::spans::Span;

/// An immutable titled text unit: one sonnet.
///
/// Created once at corpus load (see [`crate::corpus`]), lives for the
/// process lifetime, never mutated. The `id` is parsed from the leading
/// `"Sonnet N"` pattern of the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u32,
    pub title: String,
    /// Verse lines in order, 1-indexed by convention.
    pub lines: Vec<String>,
}

impl Document {
    /// Fetch a line by its 1-based number.
    pub fn line(&self, line_no: u32) -> Option<&str> {
        let idx = line_no.checked_sub(1)? as usize;
        self.lines.get(idx).map(String::as_str)
    }
}

/// Where in a document a token occurrence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    /// The full title string.
    Title,
    /// A verse line, 1-based.
    Line(u32),
}

/// One recorded occurrence of a stem within a document.
///
/// Postings are append-only: a word repeated in the same line produces one
/// posting per occurrence, never deduplicated. `surface_len` is the byte
/// length of the original, unnormalized token, which is what the span must
/// cover when highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub location: Location,
    /// Byte offset of the token within its source text.
    pub offset: usize,
    /// Byte length of the original surface token.
    pub surface_len: usize,
}

impl Posting {
    /// The character range this occurrence covers in its source text.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.surface_len)
    }
}

/// Occurrence spans within a single verse line.
///
/// `spans` may contain duplicates and overlaps until the renderer merges
/// them; the semantic match count lives on the enclosing [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    pub line_no: u32,
    /// Verbatim line content, for display.
    pub text: String,
    pub spans: Vec<Span>,
}

/// Per-document aggregate for one query.
///
/// `title` doubles as the display string and the sort key of the final
/// result list. `line_matches` stay sorted by line number ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub title_spans: Vec<Span>,
    pub line_matches: Vec<LineMatch>,
    /// Total occurrence count behind this result. Unaffected by span
    /// merging, which is display-only.
    pub match_count: usize,
}

impl SearchResult {
    /// Merge two results about the *same* document into one.
    ///
    /// Match counts add; title spans concatenate (duplicates preserved) and
    /// are re-sorted; line matches merge by line number, concatenating span
    /// lists under the existing line text. Commutative and associative with
    /// respect to `match_count` and the multiset of accumulated spans. The
    /// output ordering (title spans sorted, lines ascending) is a
    /// presentation detail.
    pub fn combine(&self, other: &SearchResult) -> SearchResult {
        debug_assert_eq!(
            self.title, other.title,
            "combine called across different documents"
        );

        let mut title_spans = self.title_spans.clone();
        title_spans.extend_from_slice(&other.title_spans);
        title_spans.sort_unstable();

        let mut by_line: BTreeMap<u32, LineMatch> = self
            .line_matches
            .iter()
            .map(|lm| (lm.line_no, lm.clone()))
            .collect();
        for lm in &other.line_matches {
            match by_line.entry(lm.line_no) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().spans.extend_from_slice(&lm.spans);
                }
                Entry::Vacant(entry) => {
                    entry.insert(lm.clone());
                }
            }
        }

        SearchResult {
            title: self.title.clone(),
            title_spans,
            line_matches: by_line.into_values().collect(),
            match_count: self.match_count + other.match_count,
        }
    }

    /// Number of spans currently held, across the title and all lines.
    ///
    /// Equals `match_count` as long as no presentation merging has touched
    /// the span lists.
    pub fn span_count(&self) -> usize {
        self.title_spans.len() + self.line_matches.iter().map(|lm| lm.spans.len()).sum::<usize>()
    }
}

/// How multiple query words combine into one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Intersection: a document must match every query word.
    And,
    /// Union: a document may match any query word.
    Or,
}
