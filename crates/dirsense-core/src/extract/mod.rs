//! Extract module: Short text snippets from file contents
//!
//! Plain text, PDF and Word documents are read and truncated to a fixed
//! character budget. Every other media type is reported as unsupported.
//! Extraction never fails: errors are carried inside the [`Snippet`].

mod docx;
mod pdf;
mod snippet;
mod text;

use std::path::Path;

pub use snippet::{ExtractError, Snippet};

use crate::scanner::media_type::WORD_DOCUMENT;

/// Default snippet budget in characters
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 1000;

/// Content kinds that get their own extraction routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    PlainText,
    Pdf,
    WordDoc,
    Other,
}

impl ContentKind {
    /// Classify a guessed media type
    #[must_use]
    pub fn from_media_type(media_type: Option<&str>) -> Self {
        match media_type {
            Some("text/plain") => Self::PlainText,
            Some("application/pdf") => Self::Pdf,
            Some(WORD_DOCUMENT) => Self::WordDoc,
            _ => Self::Other,
        }
    }
}

/// Reads snippets from files
#[derive(Debug, Clone, Copy)]
pub struct ContentExtractor {
    max_chars: usize,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SNIPPET_MAX_CHARS)
    }
}

impl ContentExtractor {
    /// Create an extractor that keeps at most `max_chars` characters
    #[must_use]
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Extract a snippet for `path` given its guessed media type
    #[must_use]
    pub fn extract(&self, path: &Path, media_type: Option<&str>) -> Snippet {
        let text = match ContentKind::from_media_type(media_type) {
            ContentKind::PlainText => text::read_text(path),
            ContentKind::Pdf => pdf::read_pdf(path),
            ContentKind::WordDoc => docx::read_docx(path),
            ContentKind::Other => return Snippet::Unsupported,
        };
        match text {
            Ok(text) => Snippet::Text(truncate_chars(&text, self.max_chars)),
            Err(e) => Snippet::Failed(e),
        }
    }
}

/// Keep the first `max_chars` characters of `text`
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
