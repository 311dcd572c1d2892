//! Tokenization, normalization, and stemming.
//!
//! The tokenizer is deliberately dumb: maximal runs of non-whitespace, with
//! their byte offsets, nothing stripped. Normalization and stemming happen
//! afterwards so that postings can still point at the original surface text
//! for highlighting.
//!
//! Stemming is an injected dependency ([`Stemmer`]), not a process-wide
//! global: the index and the query path share one `Arc<dyn Stemmer>`, and a
//! different algorithm can be swapped in without touching either.

use rust_stemmers::Algorithm;

/// Split text into whitespace-delimited tokens with their byte offsets.
///
/// Each returned pair satisfies `text[offset..offset + token.len()] == token`,
/// and tokens appear in left-to-right offset order. No normalization and no
/// filtering: punctuation-adjacent tokens come back whole (`"summer's"`,
/// `"day?"`). Empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<(&str, usize)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((&text[s..i], s));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((&text[s..], s));
    }

    tokens
}

/// Lowercase a token and strip the fixed punctuation set (`'`, `,`, `.`).
///
/// `"Summer's"` becomes `"summers"`; a token of only stripped punctuation
/// becomes empty, which the index and query paths treat as "never indexed,
/// never matches".
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | ',' | '.'))
        .collect()
}

/// Reduces a raw token to its canonical stem - the indexing and lookup key.
///
/// Implementations apply [`normalize`] first, then their stemming algorithm.
/// Returning an empty string means the token carries nothing indexable.
pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// The default stemmer: Snowball's English (Porter-family) algorithm.
pub struct EnglishStemmer {
    inner: rust_stemmers::Stemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        EnglishStemmer {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, token: &str) -> String {
        let normalized = normalize(token);
        if normalized.is_empty() {
            return normalized;
        }
        self.inner.stem(&normalized).into_owned()
    }
}
