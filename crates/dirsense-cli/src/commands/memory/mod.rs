//! Memory command: Inspect remembered folder records

use std::io::{self, Write};

use anyhow::Result;
use dirsense_core::MemoryStore;

use crate::cli::Settings;

/// List every remembered folder
///
/// # Errors
/// Returns an error if output cannot be written.
pub fn list(settings: &Settings) -> Result<()> {
    let store = MemoryStore::new(settings.memory_file());
    write_list(&store, &mut io::stdout())
}

/// Show the record remembered for `path`
///
/// # Errors
/// Returns an error if the record cannot be rendered or written.
pub fn show(settings: &Settings, path: &str) -> Result<()> {
    let store = MemoryStore::new(settings.memory_file());
    write_record(&store, path, &mut io::stdout())
}

/// Write one `timestamp  path` line per record
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_list(store: &MemoryStore, out: &mut impl Write) -> Result<()> {
    let records = store.load_all();
    if records.is_empty() {
        writeln!(out, "No folders remembered in {}", store.path().display())?;
        return Ok(());
    }

    for (path, record) in &records {
        writeln!(
            out,
            "{}  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            path
        )?;
    }
    writeln!(out, "\n{} folders remembered", records.len())?;
    Ok(())
}

/// Write the record for `path` as pretty JSON
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn write_record(store: &MemoryStore, path: &str, out: &mut impl Write) -> Result<()> {
    let path = dirsense_core::describe::normalize_path(path);
    match store.get(path) {
        Some(record) => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        None => writeln!(out, "No cached record for {path}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests;
