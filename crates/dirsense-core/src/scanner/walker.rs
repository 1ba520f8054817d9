//! Folder analyzer: Walks a directory tree and summarizes its contents

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::media_type;
use crate::extract::{ContentExtractor, Snippet};
use crate::memory::{FileContents, Summary};

/// One file seen during analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub path: PathBuf,
    pub name: String,
    pub media_type: Option<&'static str>,
    pub size: u64,
}

impl Detail {
    /// Size in kibibytes
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {:.2} KB)",
            self.name,
            self.media_type.unwrap_or("Unknown"),
            self.size_kb()
        )
    }
}

/// Result of a single analysis pass
#[derive(Debug, Default)]
pub struct FolderAnalysis {
    pub summary: Summary,
    /// Files in traversal order
    pub details: Vec<Detail>,
    /// Snippets keyed by walked path, in traversal order
    pub contents: Vec<(PathBuf, Snippet)>,
}

impl FolderAnalysis {
    /// Rendered detail lines for the first `limit` files
    #[must_use]
    pub fn detail_lines(&self, limit: usize) -> Vec<String> {
        self.details
            .iter()
            .take(limit)
            .map(ToString::to_string)
            .collect()
    }

    /// Rendered snippets for the first `limit` files
    #[must_use]
    pub fn file_contents(&self, limit: usize) -> FileContents {
        self.contents
            .iter()
            .take(limit)
            .map(|(path, snippet)| (path.display().to_string(), snippet.to_string()))
            .collect()
    }
}

enum EntryKind {
    Directory,
    File,
}

/// Walks a folder and builds a [`FolderAnalysis`]
#[derive(Debug, Clone)]
pub struct FolderAnalyzer {
    extractor: ContentExtractor,
}

impl FolderAnalyzer {
    /// Create an analyzer that reads snippets with the given extractor
    #[must_use]
    pub fn new(extractor: ContentExtractor) -> Self {
        Self { extractor }
    }

    /// Walk `root` top-down and summarize every file below it.
    ///
    /// Inside each directory the files are visited before the subdirectories
    /// are descended into. Unreadable entries are skipped; a missing root
    /// yields an empty analysis.
    #[must_use]
    pub fn analyze(&self, root: &Path) -> FolderAnalysis {
        info!("Analyzing folder: {}", root.display());

        let mut analysis = FolderAnalysis::default();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            match classify(&entry) {
                // Each directory is one subdirectory entry of the directory
                // that listed it, so this adds up the per-directory counts.
                EntryKind::Directory => analysis.summary.total_folders += 1,
                EntryKind::File => self.record_file(&mut analysis, entry.path()),
            }
        }

        info!(
            "Analysis complete. Files: {}, Folders: {}",
            analysis.summary.total_files, analysis.summary.total_folders
        );
        analysis
    }

    fn record_file(&self, analysis: &mut FolderAnalysis, path: &Path) {
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or_else(|e| {
            warn!("Could not read size of {}: {}", path.display(), e);
            0
        });
        let media_type = media_type::from_path(path);

        let summary = &mut analysis.summary;
        summary.total_files += 1;
        if let Some(media_type) = media_type {
            *summary.file_types.entry(media_type.to_string()).or_insert(0) += 1;
        }
        if size > summary.largest_size {
            summary.largest_size = size;
            summary.largest_file = Some(path.display().to_string());
        }

        let snippet = self.extractor.extract(path, media_type);
        debug!("Read {} ({} bytes): {}", path.display(), size, snippet.kind());

        analysis.details.push(Detail {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            media_type,
            size,
        });
        analysis.contents.push((path.to_path_buf(), snippet));
    }
}

/// Symlinks are not followed: a link to a directory still counts as a
/// subdirectory entry, anything else is treated as a file.
fn classify(entry: &DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return EntryKind::Directory;
    }
    if file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
        return EntryKind::Directory;
    }
    EntryKind::File
}
