//! Folder memory model types

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one folder scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub total_files: u64,
    pub total_folders: u64,
    /// Number of files per known media type
    pub file_types: BTreeMap<String, u64>,
    pub largest_file: Option<String>,
    /// Size of `largest_file` in bytes, 0 when no file was larger than 0
    pub largest_size: u64,
}

impl Summary {
    /// Size of the largest file in kibibytes
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn largest_size_kb(&self) -> f64 {
        self.largest_size as f64 / 1024.0
    }
}

/// Snippets keyed by file path, kept in insertion order.
///
/// Serialized as a JSON object. Document order is preserved on load, so
/// the n-th entry still belongs to the n-th recorded detail line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileContents(IndexMap<String, String>);

impl FileContents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the snippet for `path`, keeping its position
    pub fn insert(&mut self, path: impl Into<String>, snippet: impl Into<String>) {
        self.0.insert(path.into(), snippet.into());
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(path, snippet)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, s)| (p.as_str(), s.as_str()))
    }

    /// Snippet texts in insertion order
    pub fn snippets(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FileContents {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(path, snippet)| (path.into(), snippet.into()))
                .collect(),
        )
    }
}

/// Cached result for one folder path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Folder path exactly as requested; the memory key
    pub folder_path: String,
    /// Local time the record was produced
    pub timestamp: NaiveDateTime,
    pub summary: Summary,
    /// Rendered detail lines for the first recorded files
    pub details: Vec<String>,
    /// Snippets for the first recorded files
    pub file_contents: FileContents,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl Record {
    /// Copy of this record with `reasoning` set
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}
