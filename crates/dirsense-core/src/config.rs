//! Application configuration
//!
//! Values come from the process environment and are passed explicitly to
//! the components that need them.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::extract::DEFAULT_SNIPPET_MAX_CHARS;
use crate::llm::{GeminiConfig, DEFAULT_GEMINI_MODEL};
use crate::memory::MEMORY_FILE_NAME;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "DIRSENSE_MODEL";
pub const MEMORY_FILE_VAR: &str = "DIRSENSE_MEMORY_FILE";
pub const SNIPPET_MAX_CHARS_VAR: &str = "DIRSENSE_SNIPPET_MAX_CHARS";
pub const TIMEOUT_SECS_VAR: &str = "DIRSENSE_TIMEOUT_SECS";

/// Default bound on a single generation call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Settings shared by the description pipeline
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub memory_file: PathBuf,
    pub snippet_max_chars: usize,
    pub generation_timeout: Duration,
}

impl AppConfig {
    /// Create a configuration with defaults for everything but the key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            memory_file: default_memory_file(),
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
            generation_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load the configuration from the environment
    ///
    /// # Errors
    /// Returns an error if the API key is missing or an override is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingEnv(API_KEY_VAR))?;

        let mut config = Self::new(api_key);
        if let Some(model) = optional_var(MODEL_VAR) {
            config.model = model;
        }
        if let Some(path) = optional_var(MEMORY_FILE_VAR) {
            config.memory_file = PathBuf::from(path);
        }
        if let Some(chars) = parse_var::<usize>(SNIPPET_MAX_CHARS_VAR)? {
            config.snippet_max_chars = chars;
        }
        if let Some(secs) = parse_var::<u64>(TIMEOUT_SECS_VAR)? {
            config.generation_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Set the model name
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the memory document path
    #[must_use]
    pub fn with_memory_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.memory_file = path.into();
        self
    }

    /// Set the snippet character budget
    #[must_use]
    pub fn with_snippet_max_chars(mut self, chars: usize) -> Self {
        self.snippet_max_chars = chars;
        self
    }

    /// Set the generation timeout
    #[must_use]
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    /// Gemini client settings derived from this configuration
    #[must_use]
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_timeout(self.generation_timeout)
    }
}

/// Memory file path used when nothing else is configured: next to the
/// executable, or in the working directory if that cannot be resolved
#[must_use]
pub fn default_memory_file() -> PathBuf {
    env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map_or_else(|| PathBuf::from(MEMORY_FILE_NAME), |dir| dir.join(MEMORY_FILE_NAME))
}

/// Memory file from the environment, falling back to [`default_memory_file`]
#[must_use]
pub fn memory_file_from_env() -> PathBuf {
    optional_var(MEMORY_FILE_VAR).map_or_else(default_memory_file, PathBuf::from)
}

fn optional_var(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    optional_var(var)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var, value })
        })
        .transpose()
}
