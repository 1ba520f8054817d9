//! Tests for describe command output

#![allow(clippy::expect_used)]

use crate::commands::describe::execute;
use async_trait::async_trait;
use dirsense_core::{
    ContentExtractor, DescriptionService, FolderAnalyzer, Generator, LlmError, MemoryStore,
    DESCRIPTION_FALLBACK,
};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Answers description prompts and reasoning prompts differently
struct StubGenerator {
    calls: Arc<AtomicUsize>,
    fail_reasoning: bool,
}

#[async_trait]
impl Generator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("Reasoning:") {
            if self.fail_reasoning {
                return Err(LlmError::EmptyResponse);
            }
            return Ok("Reasoning: Looks like notes.".to_string());
        }
        Ok("Summary: A folder of notes.".to_string())
    }
}

struct Fixture {
    temp_dir: TempDir,
    folder: String,
}

fn fixture() -> Fixture {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let folder = temp_dir.path().join("notes");
    fs::create_dir(&folder).expect("Failed to create dir");
    fs::write(folder.join("todo.txt"), "buy milk").expect("Failed to write file");
    Fixture {
        folder: folder.display().to_string(),
        temp_dir,
    }
}

fn service(memory_dir: &Path, fail_reasoning: bool) -> (DescriptionService<StubGenerator>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = StubGenerator {
        calls: Arc::clone(&calls),
        fail_reasoning,
    };
    let service = DescriptionService::new(
        MemoryStore::new(memory_dir.join("folder_memory.json")),
        FolderAnalyzer::new(ContentExtractor::default()),
        generator,
        Duration::from_secs(10),
    );
    (service, calls)
}

async fn output_of(
    service: &DescriptionService<StubGenerator>,
    path: &str,
    use_memory: bool,
    reason: bool,
) -> String {
    let mut out = Vec::new();
    execute(service, path, use_memory, reason, &mut out)
        .await
        .expect("output written");
    String::from_utf8(out).expect("utf-8 output")
}

#[tokio::test]
async fn test_description_only() {
    let fx = fixture();
    let (service, calls) = service(fx.temp_dir.path(), false);

    let output = output_of(&service, &fx.folder, true, false).await;

    assert_eq!(output, "\nFolder Description:\nA folder of notes.\n");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_description_and_reasoning() {
    let fx = fixture();
    let (service, _) = service(fx.temp_dir.path(), false);

    let output = output_of(&service, &fx.folder, true, true).await;

    assert_eq!(
        output,
        "\nFolder Description:\nA folder of notes.\n\nReasoning:\nLooks like notes.\n"
    );
    assert_eq!(
        service.store().get(&fx.folder).and_then(|r| r.reasoning),
        Some("Looks like notes.".to_string())
    );
}

#[tokio::test]
async fn test_cached_reasoning_is_reused() {
    let fx = fixture();
    let (service, calls) = service(fx.temp_dir.path(), false);

    output_of(&service, &fx.folder, true, true).await;
    let second = output_of(&service, &fx.folder, true, true).await;

    assert!(second.contains("Looks like notes."));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_reasoning_is_printed_but_not_remembered() {
    let fx = fixture();
    let (service, _) = service(fx.temp_dir.path(), true);

    let output = output_of(&service, &fx.folder, true, true).await;

    assert!(output.contains("\nReasoning:\nReasoning failed due to API issue: "));
    let record = service.store().get(&fx.folder).expect("description remembered");
    assert_eq!(record.description, "A folder of notes.");
    assert!(record.reasoning.is_none());
}

#[tokio::test]
async fn test_refresh_regenerates() {
    let fx = fixture();
    let (service, calls) = service(fx.temp_dir.path(), false);

    output_of(&service, &fx.folder, true, false).await;
    output_of(&service, &fx.folder, false, false).await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_missing_folder_still_prints_description() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing").display().to_string();
    let (service, _) = service(temp_dir.path(), false);

    let output = output_of(&service, &missing, true, false).await;

    assert!(output.starts_with("\nFolder Description:\n"));
    assert!(!output.contains(DESCRIPTION_FALLBACK));
}
