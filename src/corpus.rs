// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus records and document construction.
//!
//! Raw records arrive as `{"title": ..., "lines": [...]}` pairs; the title
//! must carry the document number (`"Sonnet 18: ..."`). Validation is
//! fail-fast: a title without a parseable number, or a number seen twice,
//! aborts the whole load. Search never runs against a partially built
//! corpus.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Document;

/// Errors surfaced while loading and validating a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The title does not contain a parseable document number.
    #[error("title {title:?} does not contain a document number")]
    MalformedTitle { title: String },

    /// Two records parsed to the same document number.
    #[error("duplicate document id {id}")]
    DuplicateId { id: u32 },

    #[error("failed to read corpus file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A raw document record as supplied by the corpus collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub title: String,
    pub lines: Vec<String>,
}

impl Document {
    /// Build a document from a raw record, parsing the id from the title.
    ///
    /// The id is the second whitespace-separated word of the title with any
    /// trailing colon removed: `"Sonnet 18: Shall I compare..."` yields 18.
    pub fn from_record(record: DocumentRecord) -> Result<Self, CorpusError> {
        let id = parse_title_id(&record.title).ok_or_else(|| CorpusError::MalformedTitle {
            title: record.title.clone(),
        })?;
        Ok(Document {
            id,
            title: record.title,
            lines: record.lines,
        })
    }
}

/// Extract the document number from a `"Sonnet N: ..."` title.
fn parse_title_id(title: &str) -> Option<u32> {
    let word = title.split_whitespace().nth(1)?;
    word.trim_end_matches(':').parse().ok()
}

/// Validate raw records into documents, rejecting malformed titles and
/// duplicate ids.
pub fn build_corpus(records: Vec<DocumentRecord>) -> Result<Vec<Document>, CorpusError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut documents = Vec::with_capacity(records.len());

    for record in records {
        let doc = Document::from_record(record)?;
        if !seen.insert(doc.id) {
            return Err(CorpusError::DuplicateId { id: doc.id });
        }
        documents.push(doc);
    }

    Ok(documents)
}

/// Load a corpus from a JSON file holding an array of records.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>, CorpusError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let records: Vec<DocumentRecord> = serde_json::from_str(&raw)?;
    let documents = build_corpus(records)?;
    info!(
        "loaded {} documents from {}",
        documents.len(),
        path.as_ref().display()
    );
    Ok(documents)
}
