//! Command-line arguments shared between main and library

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use dirsense_core::config::{self, AppConfig};

#[derive(Parser)]
#[command(name = "dirsense")]
#[command(about = "Describe folders with a language model and remember the answers")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for values otherwise read from the environment
#[derive(Args, Debug, Default, Clone)]
pub struct Settings {
    /// Memory file location
    #[arg(long, global = true)]
    pub memory_file: Option<PathBuf>,

    /// Maximum characters kept per file snippet
    #[arg(long, global = true)]
    pub snippet_max_chars: Option<usize>,

    /// Gemini model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Timeout for a single generation call, in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe a folder, using the memory file when possible
    Describe {
        /// Folder to describe (prompted for when omitted)
        path: Option<String>,

        /// Ignore any remembered description
        #[arg(long)]
        refresh: bool,

        /// Also reason about the folder's purpose
        #[arg(long)]
        reason: bool,
    },
    /// Inspect the memory file
    Memory {
        #[command(subcommand)]
        command: MemoryCommands,
    },
}

#[derive(Subcommand)]
pub enum MemoryCommands {
    /// List remembered folders
    List,
    /// Show the record remembered for a folder
    Show {
        /// Folder path as it was described
        path: String,
    },
}

impl Settings {
    /// Apply the command-line overrides on top of `config`
    #[must_use]
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.memory_file {
            config = config.with_memory_file(path.clone());
        }
        if let Some(chars) = self.snippet_max_chars {
            config = config.with_snippet_max_chars(chars);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_generation_timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Memory file to use without loading the full configuration
    #[must_use]
    pub fn memory_file(&self) -> PathBuf {
        self.memory_file
            .clone()
            .unwrap_or_else(config::memory_file_from_env)
    }
}

#[cfg(test)]
mod tests;
