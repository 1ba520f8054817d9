//! Describe command: Describe a folder and optionally reason about it

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use dirsense_core::describe::reasoning_fallback;
use dirsense_core::{AppConfig, DescriptionService, GeminiClient, Generator, Origin};
use tracing::info;

use crate::cli::Settings;

/// Run the describe command
///
/// # Errors
/// Returns an error if the configuration is incomplete, the Gemini client
/// cannot be built or output cannot be written.
pub async fn run(settings: &Settings, path: Option<String>, refresh: bool, reason: bool) -> Result<()> {
    let config = settings.apply(AppConfig::from_env()?);
    let client = GeminiClient::new(config.gemini())?;
    let service = DescriptionService::from_config(&config, client);

    let path = match path {
        Some(path) => path,
        None => prompt_folder_path(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    execute(&service, &path, !refresh, reason, &mut io::stdout()).await
}

/// Describe `path` and print the result to `out`
///
/// Reasoning is generated only when asked for. A remembered reasoning is
/// reused when the description itself came from memory; a freshly generated
/// one is remembered unless generation failed.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub async fn execute<G: Generator>(
    service: &DescriptionService<G>,
    path: &str,
    use_memory: bool,
    reason: bool,
    out: &mut impl Write,
) -> Result<()> {
    let described = service.describe(path, use_memory).await;
    let record = described.record;

    writeln!(out, "\nFolder Description:")?;
    writeln!(out, "{}", record.description)?;

    if !reason {
        return Ok(());
    }

    let reasoning = match (described.origin, &record.reasoning) {
        (Origin::Cached, Some(reasoning)) => {
            info!("Using cached reasoning");
            reasoning.clone()
        }
        _ => match service.try_reason(&record).await {
            Ok(reasoning) => {
                service.remember_reasoning(&record, &reasoning);
                reasoning
            }
            Err(e) => reasoning_fallback(&e),
        },
    };

    writeln!(out, "\nReasoning:")?;
    writeln!(out, "{reasoning}")?;
    Ok(())
}

/// Ask for a folder path on `output` and read one line from `input`
///
/// # Errors
/// Returns an error if the terminal cannot be used or the answer is empty.
pub fn prompt_folder_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "Enter folder path: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        bail!("No folder path given");
    }
    Ok(path.to_string())
}

#[cfg(test)]
mod tests;
