//! Cache-aware folder description service

use std::path::Path;
use std::time::Duration;

use chrono::Local;
use tracing::{info, warn};

use super::prompt::{self, REASONING_LABEL, SUMMARY_LABEL};
use crate::config::AppConfig;
use crate::extract::ContentExtractor;
use crate::llm::{Generator, LlmError};
use crate::memory::{MemoryStore, Record, MAX_RECORDED_FILES};
use crate::scanner::FolderAnalyzer;

/// Description used when generation fails
pub const DESCRIPTION_FALLBACK: &str =
    "Failed to generate description due to API issue. Folder analysis completed.";

/// Where a description came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Analyzed and generated in this call
    Fresh,
    /// Served from the memory file without touching the folder
    Cached,
}

/// Result of [`DescriptionService::describe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Described {
    pub record: Record,
    pub origin: Origin,
}

/// Orchestrates memory lookup, folder analysis and generation
pub struct DescriptionService<G> {
    store: MemoryStore,
    analyzer: FolderAnalyzer,
    generator: G,
    timeout: Duration,
}

impl<G: Generator> DescriptionService<G> {
    /// Create a service from its parts
    #[must_use]
    pub fn new(store: MemoryStore, analyzer: FolderAnalyzer, generator: G, timeout: Duration) -> Self {
        Self {
            store,
            analyzer,
            generator,
            timeout,
        }
    }

    /// Create a service wired from `config`
    #[must_use]
    pub fn from_config(config: &AppConfig, generator: G) -> Self {
        Self::new(
            MemoryStore::new(&config.memory_file),
            FolderAnalyzer::new(ContentExtractor::new(config.snippet_max_chars)),
            generator,
            config.generation_timeout,
        )
    }

    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Describe a folder, reusing the remembered record when allowed.
    ///
    /// The lookup uses the path exactly as given (minus surrounding
    /// quotes). A remembered record is returned without looking at the
    /// folder again. Generation and save failures never fail the call.
    pub async fn describe(&self, folder_path: &str, use_memory: bool) -> Described {
        let folder_path = normalize_path(folder_path);
        info!("Describing folder: {}", folder_path);

        if use_memory {
            if let Some(record) = self.store.get(folder_path) {
                info!("Using cached description from {}", record.timestamp);
                return Described {
                    record,
                    origin: Origin::Cached,
                };
            }
        }

        let analysis = self.analyzer.analyze(Path::new(folder_path));
        let details = analysis.detail_lines(MAX_RECORDED_FILES);
        let file_contents = analysis.file_contents(MAX_RECORDED_FILES);

        info!("Generating description");
        let prompt = prompt::description_prompt(&analysis.summary, &details, &file_contents);
        let description = match self.generate(&prompt).await {
            Ok(text) => prompt::strip_label(&text, SUMMARY_LABEL).to_string(),
            Err(e) => {
                warn!("API error: {}", e);
                DESCRIPTION_FALLBACK.to_string()
            }
        };

        let record = Record {
            folder_path: folder_path.to_string(),
            timestamp: Local::now().naive_local(),
            summary: analysis.summary,
            details,
            file_contents,
            description,
            reasoning: None,
        };
        self.remember(&record);

        Described {
            record,
            origin: Origin::Fresh,
        }
    }

    /// Ask for reasoning about a described folder. Failures are returned as
    /// a readable message instead of an error.
    pub async fn reason(&self, record: &Record) -> String {
        self.try_reason(record)
            .await
            .unwrap_or_else(|e| reasoning_fallback(&e))
    }

    /// Ask for reasoning about a described folder
    ///
    /// # Errors
    /// Returns the generation error, including a timeout.
    pub async fn try_reason(&self, record: &Record) -> Result<String, LlmError> {
        info!("Reasoning about folder: {}", record.folder_path);
        let prompt = prompt::reasoning_prompt(
            &record.summary,
            &record.details,
            &record.file_contents,
            &record.description,
        );
        match self.generate(&prompt).await {
            Ok(text) => Ok(prompt::strip_label(&text, REASONING_LABEL).to_string()),
            Err(e) => {
                warn!("API error: {}", e);
                Err(e)
            }
        }
    }

    /// Store `reasoning` with a copy of `record`, replacing the whole entry
    pub fn remember_reasoning(&self, record: &Record, reasoning: &str) -> Record {
        let record = record.clone().with_reasoning(reasoning);
        self.remember(&record);
        record
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        tokio::time::timeout(self.timeout, self.generator.generate(prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))?
    }

    fn remember(&self, record: &Record) {
        if let Err(e) = self.store.put(&record.folder_path, record.clone()) {
            warn!("Error saving memory: {}", e);
        }
    }
}

/// Reasoning text used when generation fails
#[must_use]
pub fn reasoning_fallback(error: &LlmError) -> String {
    format!("Reasoning failed due to API issue: {error}")
}

/// Strip quote characters surrounding a pasted path
#[must_use]
pub fn normalize_path(folder_path: &str) -> &str {
    folder_path.trim_matches(|c| c == '"' || c == '\'')
}
