//! Media type detection utilities

use std::path::Path;

/// MIME type of `.docx` documents
pub const WORD_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Guess a media type from a file extension (without the leading dot)
#[must_use]
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let media_type = match ext.to_lowercase().as_str() {
        "txt" | "bat" | "c" | "h" | "ksh" | "pl" | "srt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "md" | "markdown" => "text/markdown",
        "js" | "mjs" => "text/javascript",
        "py" => "text/x-python",
        "xml" => "text/xml",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "docx" => WORD_DOCUMENT,
        "doc" => "application/msword",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "sh" => "application/x-sh",
        "bin" | "exe" => "application/octet-stream",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        _ => return None,
    };
    Some(media_type)
}

/// Guess a media type from a file path
#[must_use]
pub fn from_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(from_extension)
}
