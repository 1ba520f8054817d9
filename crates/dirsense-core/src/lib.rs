//! dirsense-core: Core library for describing folders with a language model
//!
//! A folder is walked once to build an aggregate summary, per-file details
//! and short content snippets. The summary is turned into a prompt for a
//! generative-language model and the answer is cached per folder path in a
//! JSON memory file, so repeated requests for the same folder are served
//! without another API call.
//!
//! # Modules
//!
//! - **scanner** - folder traversal and media-type detection
//! - **extract** - plain text, PDF and DOCX snippet extraction
//! - **memory** - persisted folder records
//! - **llm** - the generation capability and the Gemini client
//! - **describe** - cache-aware description and reasoning orchestration

pub mod config;
pub mod describe;
pub mod extract;
pub mod llm;
pub mod memory;
pub mod scanner;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use describe::{Described, DescriptionService, Origin, DESCRIPTION_FALLBACK};
pub use extract::{ContentExtractor, ContentKind, ExtractError, Snippet};
pub use llm::{GeminiClient, GeminiConfig, Generator, LlmError};
pub use memory::{FileContents, MemoryError, MemoryStore, Record, Summary};
pub use scanner::{Detail, FolderAnalysis, FolderAnalyzer};
