//! Prompt templates for folder descriptions and reasoning

use crate::memory::{FileContents, Summary};

/// Label the model is asked to put in front of a description
pub const SUMMARY_LABEL: &str = "Summary:";

/// Label the model is asked to put in front of reasoning
pub const REASONING_LABEL: &str = "Reasoning:";

/// Placeholder for a detail line without a recorded snippet
const MISSING_SNIPPET: &str = "N/A";

/// Prompt asking for a concise description of the folder
#[must_use]
pub fn description_prompt(summary: &Summary, details: &[String], contents: &FileContents) -> String {
    format!(
        "Provide a concise summary of the following folder's contents based on this data:\n\
         {}\n\
         Response format:\n\
         {SUMMARY_LABEL} [Your summary here]\n",
        folder_data(summary, details, contents)
    )
}

/// Prompt asking for step-by-step reasoning about an already described folder
#[must_use]
pub fn reasoning_prompt(
    summary: &Summary,
    details: &[String],
    contents: &FileContents,
    description: &str,
) -> String {
    format!(
        "You are an advanced reasoning AI. Based on the following folder data and its summary, \
         provide step-by-step reasoning about:\n\
         1. What this folder might represent and its purpose.\n\
         2. Any patterns or insights you can infer.\n\
         3. Suggestions for actions (e.g., organizing files, further analysis).\n\
         \n\
         Folder data:\n\
         {}\
         - Summary: {description}\n\
         \n\
         Response format:\n\
         {REASONING_LABEL} [Your step-by-step reasoning and suggestions here]\n",
        folder_data(summary, details, contents)
    )
}

/// Remove a leading response label and surrounding whitespace
#[must_use]
pub fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
    let text = text.trim();
    text.strip_prefix(label).unwrap_or(text).trim()
}

/// Bullet list shared by both prompts.
///
/// Details and contents are both recorded in traversal order, so the n-th
/// snippet belongs to the n-th detail line.
fn folder_data(summary: &Summary, details: &[String], contents: &FileContents) -> String {
    let largest = summary.largest_file.as_deref().unwrap_or("none");
    let file_types = if summary.file_types.is_empty() {
        "none".to_string()
    } else {
        summary
            .file_types
            .iter()
            .map(|(media_type, count)| format!("{media_type}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut snippets = contents.snippets();
    let files = details
        .iter()
        .map(|detail| {
            let snippet = snippets.next().unwrap_or(MISSING_SNIPPET);
            format!("{detail} - Content: '{snippet}'")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "- Contains {} files and {} subfolders.\n\
         - Largest file: {largest} ({:.2} KB).\n\
         - File types: {file_types}.\n\
         - Files and snippets: {files}.\n",
        summary.total_files,
        summary.total_folders,
        summary.largest_size_kb()
    )
}
