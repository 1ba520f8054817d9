//! Word document reader
//!
//! A `.docx` file is a ZIP archive; the body text lives in
//! `word/document.xml`. Only paragraphs directly inside `<w:body>` are read,
//! so table cells are left out.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Read the body paragraphs of a `.docx` file, joined by single spaces
pub(super) fn read_docx(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .map_err(|_| ExtractError::Docx(format!("missing {DOCUMENT_XML}")))?
        .read_to_string(&mut xml)?;

    Ok(body_paragraphs(&xml)?.join(" "))
}

/// Collect the text of each top-level body paragraph, empty ones included
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();

    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut current: Option<String> = None;
    let mut paragraph_depth = 0usize;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Docx(e.to_string()))?;
        match event {
            Event::Start(e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"body" => body_depth = Some(depth),
                    b"p" if current.is_none() && body_depth.is_some_and(|b| depth == b + 1) => {
                        current = Some(String::new());
                        paragraph_depth = depth;
                    }
                    b"r" => in_run = true,
                    b"t" => in_text = true,
                    _ => {}
                }
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if current.is_none() && body_depth == Some(depth) => {
                    paragraphs.push(String::new());
                }
                b"tab" if in_run => push_to(&mut current, "\t"),
                b"br" | b"cr" if in_run => push_to(&mut current, "\n"),
                _ => {}
            },
            Event::End(e) => {
                match e.local_name().as_ref() {
                    b"p" if depth == paragraph_depth => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    b"r" => in_run = false,
                    b"t" => in_text = false,
                    b"body" => body_depth = None,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(e) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractError::Docx(e.to_string()))?;
                push_to(&mut current, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_to(current: &mut Option<String>, text: &str) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push_str(text);
    }
}
