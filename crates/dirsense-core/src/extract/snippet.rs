//! Snippet values and extraction errors

use std::fmt;

use thiserror::Error;

/// Marker stored for files whose content is not read
pub const UNSUPPORTED_MARKER: &str = "Content reading not supported for this file type.";

/// Prefix stored in front of extraction errors
pub const ERROR_PREFIX: &str = "Error reading file: ";

/// Errors that can occur while reading a file's text
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX error: {0}")]
    Docx(String),
}

/// Truncated textual representation of one file
#[derive(Debug)]
pub enum Snippet {
    /// Extracted text, already truncated
    Text(String),
    /// The media type has no extractor
    Unsupported,
    /// Extraction failed
    Failed(ExtractError),
}

impl Snippet {
    /// Short label for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Unsupported => "unsupported",
            Self::Failed(_) => "failed",
        }
    }

    /// Extracted text, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Unsupported => f.write_str(UNSUPPORTED_MARKER),
            Self::Failed(e) => write!(f, "{ERROR_PREFIX}{e}"),
        }
    }
}
