//! Positional full-text search over titled verse collections.
//!
//! This crate indexes a fixed corpus of sonnets and answers free-text
//! queries with the exact character spans where each query term occurs - in
//! the title and in individual lines - so callers can highlight matches.
//! Results are grouped and ordered by title only; there is no relevance
//! scoring.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│   index.rs   │────▶│  search.rs  │
//! │ (Document,  │     │(InvertedIndex│     │ (Searcher,  │
//! │  loading)   │     │  build/lookup)│    │  AND / OR)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              spans.rs + highlight.rs                 │
//! │   (Span, merge_spans, ANSI highlight rendering)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Tokenization and stemming live in `analyze.rs`; the stemmer is an
//! injected trait object shared by the index build and the query path.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use stanza::{load_corpus, EnglishStemmer, Searcher, SearchMode};
//!
//! let documents = load_corpus("sonnets.json")?;
//! let searcher = Searcher::new(documents, Arc::new(EnglishStemmer::new()));
//!
//! for result in searcher.search("thee summer", SearchMode::And) {
//!     println!("{} ({} matches)", result.title, result.match_count);
//! }
//! ```

// Module declarations
mod analyze;
mod corpus;
mod highlight;
mod index;
mod search;
mod spans;
pub mod testing;
mod types;

// Re-exports for public API
pub use analyze::{normalize, tokenize, EnglishStemmer, Stemmer};
pub use corpus::{build_corpus, load_corpus, CorpusError, DocumentRecord};
pub use highlight::{highlight, HighlightStyle};
pub use index::InvertedIndex;
pub use search::Searcher;
pub use spans::{merge_spans, Span};
pub use types::{Document, LineMatch, Location, Posting, SearchMode, SearchResult};
