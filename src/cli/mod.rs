// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the stanza command-line interface.
//!
//! Two subcommands: `search` to query a corpus and display highlighted
//! matches, and `inspect` to examine what the index built from it looks
//! like. Argument parsing stays in this layer; the library never sees clap
//! types.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use stanza::{HighlightStyle, SearchMode};

#[derive(Parser)]
#[command(
    name = "stanza",
    about = "Positional full-text search over titled verse collections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display matching documents
    Search {
        /// Path to corpus JSON file (array of {title, lines} records)
        #[arg(short, long)]
        corpus: String,

        /// Free-text query; words are split on whitespace
        query: String,

        /// How query words combine: every word must match (and) or any (or)
        #[arg(short, long, value_enum, default_value_t = ModeArg::Or)]
        mode: ModeArg,

        /// Highlight style for matched spans
        #[arg(long, value_enum, default_value_t = HighlightArg::Default)]
        highlight: HighlightArg,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print corpus and index statistics
    Inspect {
        /// Path to corpus JSON file
        #[arg(short, long)]
        corpus: String,
    },
}

/// CLI-facing combination mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    And,
    Or,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::And => SearchMode::And,
            ModeArg::Or => SearchMode::Or,
        }
    }
}

/// CLI-facing highlight selector: off, or one of the two marker styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HighlightArg {
    Off,
    Default,
    Bright,
}

impl HighlightArg {
    /// The library style this selector maps to, if any.
    pub fn style(self) -> Option<HighlightStyle> {
        match self {
            HighlightArg::Off => None,
            HighlightArg::Default => Some(HighlightStyle::Default),
            HighlightArg::Bright => Some(HighlightStyle::Bright),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_arg_maps_to_search_mode() {
        assert_eq!(SearchMode::from(ModeArg::And), SearchMode::And);
        assert_eq!(SearchMode::from(ModeArg::Or), SearchMode::Or);
    }

    #[test]
    fn test_highlight_off_has_no_style() {
        assert_eq!(HighlightArg::Off.style(), None);
        assert_eq!(HighlightArg::Default.style(), Some(HighlightStyle::Default));
        assert_eq!(HighlightArg::Bright.style(), Some(HighlightStyle::Bright));
    }
}
