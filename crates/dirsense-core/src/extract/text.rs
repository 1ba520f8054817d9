//! Plain text reader

use std::path::Path;

use super::ExtractError;

/// Read a whole file as UTF-8
pub(super) fn read_text(path: &Path) -> Result<String, ExtractError> {
    Ok(std::fs::read_to_string(path)?)
}
