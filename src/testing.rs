//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::analyze::{normalize, Stemmer};
use crate::types::Document;

/// Build a sonnet with a conventional `"Sonnet N: ..."` title.
pub fn sonnet(id: u32, title_rest: &str, lines: &[&str]) -> Document {
    Document {
        id,
        title: format!("Sonnet {}: {}", id, title_rest),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

/// The canonical two-sonnet fixture corpus.
///
/// Sonnet 1 carries "thee" and "summer's" in line 3 and nowhere else;
/// Sonnet 2 contains neither word. Several tests depend on exactly that
/// distribution - extend with new documents rather than editing these two.
pub fn sample_corpus() -> Vec<Document> {
    vec![
        sonnet(
            1,
            "From fairest creatures we desire increase",
            &[
                "From fairest creatures we desire increase,",
                "That thereby beauty's rose might never die,",
                "Shall I compare thee to a summer's day?",
                "Thou art more lovely and more temperate:",
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
    ]
}

/// A stemmer that only normalizes, for tests that need predictable stems.
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        normalize(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sonnet_builder_title() {
        let doc = sonnet(18, "Shall I compare thee", &["a line"]);
        assert_eq!(doc.id, 18);
        assert_eq!(doc.title, "Sonnet 18: Shall I compare thee");
        assert_eq!(doc.lines.len(), 1);
    }

    #[test]
    fn test_sample_corpus_shape() {
        let corpus = sample_corpus();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].line(3).unwrap(), "Shall I compare thee to a summer's day?");
        assert!(!corpus[1].lines.iter().any(|l| l.contains("thee")));
    }

    #[test]
    fn test_identity_stemmer_normalizes_only() {
        assert_eq!(IdentityStemmer.stem("Summer's"), "summers");
        assert_eq!(IdentityStemmer.stem("thee"), "thee");
    }
}
