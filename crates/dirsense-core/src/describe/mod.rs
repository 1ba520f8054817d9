//! Describe module: Folder descriptions backed by the memory
//!
//! Two outcomes per request: the remembered record is returned as-is, or
//! the folder is analyzed, described by the generator and remembered.

pub mod prompt;
mod service;

pub use service::{
    normalize_path, reasoning_fallback, Described, DescriptionService, Origin, DESCRIPTION_FALLBACK,
};
