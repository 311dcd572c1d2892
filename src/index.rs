// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and per-stem lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_ORDER**: within one `(stem, doc)` list, postings appear in
//!    token scan order - title first, then lines ascending, left to right.
//! 2. **NON_EMPTY_STEM**: tokens whose stem normalizes to empty are never
//!    inserted.
//! 3. **POSTING_WELLFORMED**: every posting's span lies inside the source
//!    text named by its location.
//! 4. **APPEND_ONLY**: repeated words append postings; nothing deduplicates.

use std::collections::{BTreeMap, HashMap};

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analyze::{tokenize, Stemmer};
use crate::spans::Span;
use crate::types::{Document, LineMatch, Location, Posting, SearchResult};

/// Per-document posting lists for one stem.
type PostingMap = HashMap<u32, Vec<Posting>>;

/// Positional inverted index over a fixed corpus.
///
/// Two-level mapping: stem → document id → ordered posting list, built once
/// and read-only afterwards, so concurrent queries need no synchronization.
pub struct InvertedIndex {
    terms: HashMap<String, PostingMap>,
    docs: HashMap<u32, Document>,
}

impl InvertedIndex {
    /// Build the index in a single pass over the corpus.
    ///
    /// Document order determines posting insertion order but not
    /// correctness; ids are assumed unique (the corpus loader enforces it).
    pub fn build(documents: Vec<Document>, stemmer: &dyn Stemmer) -> Self {
        let mut terms: HashMap<String, PostingMap> = HashMap::new();

        for doc in &documents {
            for (stem, posting) in scan_document(doc, stemmer) {
                push_posting(&mut terms, stem, doc.id, posting);
            }
        }

        let index = InvertedIndex {
            terms,
            docs: documents.into_iter().map(|d| (d.id, d)).collect(),
        };
        debug!(
            "indexed {} documents: {} stems, {} postings",
            index.total_docs(),
            index.term_count(),
            index.posting_count()
        );
        index
    }

    /// Build the index using parallel map-reduce.
    ///
    /// 1. **Map phase**: tokenize and stem each document independently.
    /// 2. **Reduce phase**: merge per-document posting maps into the index.
    ///
    /// Each `(stem, doc)` posting list is produced whole by one map task, so
    /// the reduce order cannot reorder postings and the result is
    /// observationally identical to [`InvertedIndex::build`].
    #[cfg(feature = "parallel")]
    pub fn build_parallel(documents: Vec<Document>, stemmer: &dyn Stemmer) -> Self {
        // MAP PHASE: per-document scans, no shared mutable state
        let scanned: Vec<(u32, Vec<(String, Posting)>)> = documents
            .par_iter()
            .map(|doc| (doc.id, scan_document(doc, stemmer)))
            .collect();

        // REDUCE PHASE: merge in corpus order
        let mut terms: HashMap<String, PostingMap> = HashMap::new();
        for (doc_id, postings) in scanned {
            for (stem, posting) in postings {
                push_posting(&mut terms, stem, doc_id, posting);
            }
        }

        let index = InvertedIndex {
            terms,
            docs: documents.into_iter().map(|d| (d.id, d)).collect(),
        };
        debug!(
            "indexed {} documents in parallel: {} stems, {} postings",
            index.total_docs(),
            index.term_count(),
            index.posting_count()
        );
        index
    }

    /// Look up one stem, producing a per-document result map.
    ///
    /// Each document's postings become one [`SearchResult`]: title postings
    /// turn into title spans, line postings group into one [`LineMatch`] per
    /// line (ascending), and `match_count` starts at the posting count. An
    /// unknown stem yields an empty map.
    pub fn lookup(&self, stem: &str) -> HashMap<u32, SearchResult> {
        let mut results = HashMap::new();
        let Some(per_doc) = self.terms.get(stem) else {
            return results;
        };

        for (&doc_id, postings) in per_doc {
            let Some(doc) = self.docs.get(&doc_id) else {
                // Unreachable for an index built through `build`: every
                // posting's doc_id is a key of `docs`.
                continue;
            };
            results.insert(doc_id, result_from_postings(doc, postings));
        }

        results
    }

    /// Number of distinct stems in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of documents indexed.
    pub fn total_docs(&self) -> usize {
        self.docs.len()
    }

    /// Total posting count across all stems and documents.
    pub fn posting_count(&self) -> usize {
        self.terms
            .values()
            .flat_map(|per_doc| per_doc.values())
            .map(Vec::len)
            .sum()
    }

    /// Check index invariants (debug assertion helper).
    #[cfg(any(debug_assertions, test))]
    pub fn check_well_formed(&self) -> bool {
        for per_doc in self.terms.values() {
            for (doc_id, postings) in per_doc {
                if postings.is_empty() {
                    return false;
                }
                let Some(doc) = self.docs.get(doc_id) else {
                    return false;
                };
                for posting in postings {
                    let source = match posting.location {
                        Location::Title => Some(doc.title.as_str()),
                        Location::Line(n) => doc.line(n),
                    };
                    let Some(source) = source else {
                        return false;
                    };
                    if posting.offset + posting.surface_len > source.len() {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// The one insert-or-append primitive: all index mutation funnels through
/// here, keyed by `(stem, doc_id)`.
fn push_posting(terms: &mut HashMap<String, PostingMap>, stem: String, doc_id: u32, posting: Posting) {
    terms
        .entry(stem)
        .or_default()
        .entry(doc_id)
        .or_default()
        .push(posting);
}

/// Tokenize and stem one document in scan order: title, then lines.
///
/// Tokens with an empty stem are dropped here and never reach the index.
fn scan_document(doc: &Document, stemmer: &dyn Stemmer) -> Vec<(String, Posting)> {
    let mut out = Vec::new();
    scan_text(&doc.title, Location::Title, stemmer, &mut out);
    for (i, line) in doc.lines.iter().enumerate() {
        scan_text(line, Location::Line(i as u32 + 1), stemmer, &mut out);
    }
    out
}

fn scan_text(
    text: &str,
    location: Location,
    stemmer: &dyn Stemmer,
    out: &mut Vec<(String, Posting)>,
) {
    for (token, offset) in tokenize(text) {
        let stem = stemmer.stem(token);
        if stem.is_empty() {
            continue;
        }
        out.push((
            stem,
            Posting {
                location,
                offset,
                surface_len: token.len(),
            },
        ));
    }
}

/// Shape one document's postings for a single stem into a `SearchResult`.
fn result_from_postings(doc: &Document, postings: &[Posting]) -> SearchResult {
    let mut title_spans: Vec<Span> = Vec::new();
    let mut by_line: BTreeMap<u32, Vec<Span>> = BTreeMap::new();

    for posting in postings {
        match posting.location {
            Location::Title => title_spans.push(posting.span()),
            Location::Line(n) => by_line.entry(n).or_default().push(posting.span()),
        }
    }

    let line_matches = by_line
        .into_iter()
        .map(|(line_no, spans)| LineMatch {
            line_no,
            text: doc.line(line_no).unwrap_or_default().to_string(),
            spans,
        })
        .collect();

    SearchResult {
        title: doc.title.clone(),
        title_spans,
        line_matches,
        match_count: postings.len(),
    }
}
