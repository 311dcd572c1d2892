//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use stanza::{Document, EnglishStemmer, Searcher};

// Re-export canonical test utilities from stanza::testing
pub use stanza::testing::{sample_corpus, sonnet, IdentityStemmer};

/// Build a searcher over the canonical two-sonnet fixture corpus.
pub fn sample_searcher() -> Searcher {
    Searcher::new(sample_corpus(), Arc::new(EnglishStemmer::new()))
}

/// Build a searcher over an arbitrary corpus with the default stemmer.
pub fn searcher_over(documents: Vec<Document>) -> Searcher {
    Searcher::new(documents, Arc::new(EnglishStemmer::new()))
}

/// A wider fixture: four sonnets with overlapping vocabulary, for tests
/// that need matches spread across several documents.
pub fn wider_corpus() -> Vec<Document> {
    vec![
        sonnet(
            1,
            "From fairest creatures we desire increase",
            &[
                "From fairest creatures we desire increase,",
                "That thereby beauty's rose might never die,",
            ],
        ),
        sonnet(
            2,
            "When forty winters shall besiege thy brow",
            &[
                "When forty winters shall besiege thy brow,",
                "And dig deep trenches in thy beauty's field,",
            ],
        ),
        sonnet(
            18,
            "Shall I compare thee to a summer's day",
            &[
                "Shall I compare thee to a summer's day?",
                "Thou art more lovely and more temperate:",
                "Rough winds do shake the darling buds of May,",
                "And summer's lease hath all too short a date;",
            ],
        ),
        sonnet(
            73,
            "That time of year thou mayst in me behold",
            &[
                "That time of year thou mayst in me behold",
                "When yellow leaves, or none, or few, do hang",
            ],
        ),
    ]
}
