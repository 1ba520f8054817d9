//! PDF text reader

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use super::ExtractError;

/// Extract the text of every page and concatenate it.
///
/// Pages without text contribute nothing. pdf-extract can panic on
/// malformed documents, so panics are turned into errors here.
pub(super) fn read_pdf(path: &Path) -> Result<String, ExtractError> {
    let extracted =
        panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path)));
    let pages = extracted
        .map_err(|payload| ExtractError::Pdf(panic_message(payload.as_ref())))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.trim().is_empty())
        .map(String::as_str)
        .collect()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unreadable document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_join_pages_concatenates_in_order() {
        assert_eq!(join_pages(&pages(&["first ", "second"])), "first second");
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        assert_eq!(join_pages(&pages(&["", "\n\n", "only", " "])), "only");
    }

    #[test]
    fn test_join_pages_without_pages() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn test_panic_message_from_str_payload() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("bad xref");
        assert_eq!(panic_message(payload.as_ref()), "bad xref");
    }
}
