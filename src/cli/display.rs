// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results.
//!
//! The core hands over display-ready [`SearchResult`]s; this module owns the
//! actual writing. Output shape:
//!
//! ```text
//! [1/2] Sonnet 1: From fairest creatures we desire increase
//!   [ 3] Shall I compare thee to a summer's day?
//! ```
//!
//! Highlighting respects `NO_COLOR` and non-TTY detection for pipelines, so
//! piped output stays clean text.

use std::io;
use std::io::Write;

use stanza::{highlight, HighlightStyle, InvertedIndex, SearchResult};

/// Check if colors should be used (TTY detection).
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Write the result list in `[i/total]` blocks, one per document.
///
/// `style` of `None` renders plain text with no escape sequences at all.
pub fn render_results(
    out: &mut impl Write,
    results: &[SearchResult],
    style: Option<HighlightStyle>,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No matches.")?;
        return Ok(());
    }

    let total = results.len();
    for (i, result) in results.iter().enumerate() {
        let title = match style {
            Some(s) => highlight(&result.title, &result.title_spans, s),
            None => result.title.clone(),
        };
        writeln!(out, "\n[{}/{}] {}", i + 1, total, title)?;

        for lm in &result.line_matches {
            let text = match style {
                Some(s) => highlight(&lm.text, &lm.spans, s),
                None => lm.text.clone(),
            };
            writeln!(out, "  [{:2}] {}", lm.line_no, text)?;
        }
    }

    Ok(())
}

/// Write index statistics for the `inspect` subcommand.
pub fn render_inspect(out: &mut impl Write, index: &InvertedIndex) -> io::Result<()> {
    writeln!(out, "documents: {}", index.total_docs())?;
    writeln!(out, "stems:     {}", index.term_count())?;
    writeln!(out, "postings:  {}", index.posting_count())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanza::{EnglishStemmer, SearchMode, Searcher};
    use stanza::testing::sample_corpus;
    use std::sync::Arc;

    fn results(query: &str) -> Vec<SearchResult> {
        Searcher::new(sample_corpus(), Arc::new(EnglishStemmer::new()))
            .search(query, SearchMode::Or)
    }

    #[test]
    fn test_plain_render_has_no_escapes() {
        let mut buf = Vec::new();
        render_results(&mut buf, &results("thee"), None).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains('\x1b'));
        assert!(text.contains("[1/1] Sonnet 1:"));
        assert!(text.contains("[ 3] Shall I compare thee"));
    }

    #[test]
    fn test_highlighted_render_wraps_matches() {
        let mut buf = Vec::new();
        render_results(&mut buf, &results("thee"), Some(HighlightStyle::Bright)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\x1b[1;92mthee\x1b[0m"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut buf = Vec::new();
        render_results(&mut buf, &[], None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No matches.\n");
    }

    #[test]
    fn test_inspect_counts() {
        let searcher = Searcher::new(sample_corpus(), Arc::new(EnglishStemmer::new()));
        let mut buf = Vec::new();
        render_inspect(&mut buf, searcher.index()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("documents: 2"));
    }
}
