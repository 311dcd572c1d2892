//! Multi-word search over the inverted index.
//!
//! Each query word resolves to a per-document result map through the index;
//! the maps fold together under the selected [`SearchMode`]: `Or` unions
//! (the running set only grows), `And` intersects (the running set only
//! shrinks). The final list is sorted by title, never by score - relevance
//! ranking is explicitly out of scope.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::analyze::Stemmer;
use crate::index::InvertedIndex;
use crate::types::{Document, SearchMode, SearchResult};

/// A built index plus the stemmer the query path shares with it.
///
/// The index is read-only after construction, so a `Searcher` can serve
/// concurrent queries without synchronization.
pub struct Searcher {
    index: InvertedIndex,
    stemmer: Arc<dyn Stemmer>,
}

impl Searcher {
    /// Index the corpus and keep the stemmer for query-time use.
    pub fn new(documents: Vec<Document>, stemmer: Arc<dyn Stemmer>) -> Self {
        let index = InvertedIndex::build(documents, stemmer.as_ref());
        Searcher { index, stemmer }
    }

    /// Like [`Searcher::new`] but builds the index with parallel map-reduce.
    #[cfg(feature = "parallel")]
    pub fn new_parallel(documents: Vec<Document>, stemmer: Arc<dyn Stemmer>) -> Self {
        let index = InvertedIndex::build_parallel(documents, stemmer.as_ref());
        Searcher { index, stemmer }
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Run a free-text query, combining words under `mode`.
    ///
    /// The query splits on whitespace; each word is stemmed and looked up.
    /// The first word seeds the running map; later words fold in per the
    /// mode. A word whose stem is unindexed (or empty) contributes an empty
    /// map - under `And` that empties the running map, under `Or` it
    /// contributes nothing. An empty query yields an empty list.
    ///
    /// Results come back sorted by title ascending; re-running the same
    /// query yields an identical ordering.
    pub fn search(&self, query: &str, mode: SearchMode) -> Vec<SearchResult> {
        let mut combined: Option<HashMap<u32, SearchResult>> = None;

        for word in query.split_whitespace() {
            let stem = self.stemmer.stem(word);
            let word_results = if stem.is_empty() {
                HashMap::new()
            } else {
                self.index.lookup(&stem)
            };

            combined = Some(match combined {
                None => word_results,
                Some(running) => fold_word(running, word_results, mode),
            });
        }

        let mut results: Vec<SearchResult> = combined
            .map(|by_doc| by_doc.into_values().collect())
            .unwrap_or_default();
        results.sort_by(|a, b| a.title.cmp(&b.title));

        debug!(
            "query {:?} ({:?}) matched {} documents",
            query,
            mode,
            results.len()
        );
        results
    }
}

/// Fold one word's per-document results into the running map.
fn fold_word(
    running: HashMap<u32, SearchResult>,
    word_results: HashMap<u32, SearchResult>,
    mode: SearchMode,
) -> HashMap<u32, SearchResult> {
    match mode {
        SearchMode::Or => {
            // Union: combine where both sides matched, insert the rest
            let mut merged = running;
            for (doc_id, result) in word_results {
                match merged.entry(doc_id) {
                    Entry::Occupied(mut entry) => {
                        let combined = entry.get().combine(&result);
                        entry.insert(combined);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(result);
                    }
                }
            }
            merged
        }
        SearchMode::And => {
            // Intersection: a document survives only if this word matched it too
            running
                .into_iter()
                .filter_map(|(doc_id, existing)| {
                    word_results
                        .get(&doc_id)
                        .map(|incoming| (doc_id, existing.combine(incoming)))
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::EnglishStemmer;
    use crate::testing::{sample_corpus, sonnet};

    fn searcher() -> Searcher {
        Searcher::new(sample_corpus(), Arc::new(EnglishStemmer::new()))
    }

    #[test]
    fn test_empty_query_no_results() {
        let s = searcher();
        assert!(s.search("", SearchMode::And).is_empty());
        assert!(s.search("   ", SearchMode::Or).is_empty());
    }

    #[test]
    fn test_single_word_modes_agree() {
        let s = searcher();
        let and = s.search("thee", SearchMode::And);
        let or = s.search("thee", SearchMode::Or);
        assert_eq!(and, or);
    }

    #[test]
    fn test_and_unindexed_word_empties() {
        let s = searcher();
        assert!(s.search("thee zzz", SearchMode::And).is_empty());
        // Order of words must not matter for emptiness
        assert!(s.search("zzz thee", SearchMode::And).is_empty());
    }

    #[test]
    fn test_or_unindexed_word_ignored() {
        let s = searcher();
        let with_junk = s.search("thee zzz", SearchMode::Or);
        let without = s.search("thee", SearchMode::Or);
        assert_eq!(with_junk, without);
    }

    #[test]
    fn test_and_subset_of_or() {
        let s = searcher();
        let and = s.search("thee summer", SearchMode::And);
        let or = s.search("thee summer", SearchMode::Or);

        for result in &and {
            let counterpart = or
                .iter()
                .find(|r| r.title == result.title)
                .expect("AND result missing from OR");
            assert!(counterpart.match_count >= result.match_count);
        }
    }

    #[test]
    fn test_results_sorted_by_title() {
        let docs = vec![
            sonnet(3, "Look in thy glass", &["thy face"]),
            sonnet(1, "From fairest creatures", &["thy face"]),
            sonnet(2, "When forty winters", &["thy face"]),
        ];
        let s = Searcher::new(docs, Arc::new(EnglishStemmer::new()));
        let results = s.search("face", SearchMode::Or);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();

        let mut expected = titles.clone();
        expected.sort_unstable();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_repeated_query_word_doubles_count() {
        let s = searcher();
        let once = s.search("thee", SearchMode::And);
        let twice = s.search("thee thee", SearchMode::And);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(b.match_count, a.match_count * 2);
        }
    }

    #[test]
    fn test_determinism() {
        let s = searcher();
        let first = s.search("thee summer day", SearchMode::Or);
        let second = s.search("thee summer day", SearchMode::Or);
        assert_eq!(first, second);
    }
}
