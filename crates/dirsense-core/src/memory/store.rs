//! JSON-file backed folder memory

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::Record;

/// Errors that can occur while saving the memory file
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persisted mapping from folder path to [`Record`].
///
/// Every write rewrites the whole document through a temp file and an
/// atomic rename. Writers in separate processes are not coordinated: the
/// last one to rename wins.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    /// Create a store backed by the JSON document at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the memory document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record.
    ///
    /// A missing or unparsable document yields an empty map; a single
    /// malformed record is skipped.
    #[must_use]
    pub fn load_all(&self) -> BTreeMap<String, Record> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No memory file at {}", self.path.display());
                return BTreeMap::new();
            }
            Err(e) => {
                warn!("Error loading memory file {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        let entries: BTreeMap<String, Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error parsing memory file {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<Record>(value) {
                Ok(record) => Some((key, record)),
                Err(e) => {
                    warn!("Skipping unreadable memory entry for {}: {}", key, e);
                    None
                }
            })
            .collect()
    }

    /// Look up the record for an exact folder path
    #[must_use]
    pub fn get(&self, folder_path: &str) -> Option<Record> {
        self.load_all().remove(folder_path)
    }

    /// Insert or replace the record for `folder_path` and persist the document
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    pub fn put(&self, folder_path: &str, record: Record) -> Result<(), MemoryError> {
        info!("Saving memory for {}", folder_path);
        let mut records = self.load_all();
        records.insert(folder_path.to_string(), record);
        self.save_all(&records)?;
        info!("Memory saved to {}", self.path.display());
        Ok(())
    }

    /// Replace the whole document with `records`
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save_all(&self, records: &BTreeMap<String, Record>) -> Result<(), MemoryError> {
        let json = to_pretty_json(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(parent, source))?;
        }

        let temp_path = self.temp_path();
        let write_result = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        });
        if let Err(source) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(&temp_path, source));
        }

        fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            self.io_error(&self.path, source)
        })
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "memory.json".to_string());
        self.path
            .with_file_name(format!("{name}.tmp.{}", std::process::id()))
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> MemoryError {
        debug!("Memory store {} failed: {}", self.path.display(), source);
        MemoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Pretty JSON with four-space indentation
fn to_pretty_json(value: &impl Serialize) -> Result<Vec<u8>, MemoryError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(out)
}
