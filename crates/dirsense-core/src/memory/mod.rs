//! Memory module: Persisted folder descriptions
//!
//! Records are keyed by the folder path string exactly as requested and
//! live in a single JSON document. Records are never invalidated by
//! folder changes; a cached description is reused until the entry is
//! replaced by a fresh analysis.

mod model;
mod store;

pub use model::{FileContents, Record, Summary};
pub use store::{MemoryError, MemoryStore};

/// Number of files whose details and snippets are kept per record
pub const MAX_RECORDED_FILES: usize = 10;

/// Default memory document name
pub const MEMORY_FILE_NAME: &str = "folder_memory.json";

#[cfg(test)]
mod tests;
