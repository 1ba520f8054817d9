//! Scanner module: Folder traversal and media type detection
//!
//! Responsible for walking a folder once, classifying every file by media
//! type and collecting the aggregate summary, per-file details and snippets.

pub mod media_type;
mod walker;

pub use walker::{Detail, FolderAnalysis, FolderAnalyzer};
