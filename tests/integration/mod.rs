// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::io::Write;
use tempfile::TempDir;
use tongues::{DetectionResult, Detector, DetectorConfig, Success};

pub const ENGLISH_SENTENCE: &str = "Hello world, this is clearly English text used for testing.";

pub const FRENCH_PARAGRAPH: &str = "Le chat est sur la table et il dort dans la cuisine. \
    Nous avons une maison avec un jardin pour les enfants.";

pub const GERMAN_PARAGRAPH: &str = "Der Hund ist nicht mit der Katze im Haus. \
    Wir haben einen Garten und die Kinder spielen auf dem Rasen.";

pub const SPANISH_PARAGRAPH: &str = "La casa está en la colina y fue construida por su padre. \
    Los niños juegan en el jardín con los perros.";

/// French paragraph, blank line, German paragraph
pub fn french_then_german() -> String {
    format!("{FRENCH_PARAGRAPH}\n\n{GERMAN_PARAGRAPH}")
}

/// Detector with a small fixed pool so tests do not depend on the host CPU count
pub fn test_detector(workers: usize) -> Detector {
    Detector::new(DetectorConfig {
        workers,
        thread_name_prefix: "it-worker".to_string(),
    })
    .expect("Failed to start detector")
}

/// Unwrap a Success, panicking with the failure message otherwise
pub fn expect_success<'a>(result: &'a DetectionResult, context: &str) -> &'a Success {
    match result.success() {
        Some(success) => success,
        None => panic!(
            "{}: expected success, got failure {:?}",
            context,
            result.failure().map(|f| f.message.as_str())
        ),
    }
}

/// Structural checks every Success must pass
pub fn assert_success_shape(success: &Success) {
    assert!(
        (1..=3).contains(&success.languages.len()),
        "Success must carry 1 to 3 languages, got {}",
        success.languages.len()
    );
    for entry in &success.languages {
        assert_ne!(entry.code, "un", "UNKNOWN must never appear in languages");
        assert!((0..=100).contains(&entry.percent), "percent out of range: {}", entry.percent);
    }
    for chunk in &success.chunks {
        assert_ne!(chunk.code, "un", "UNKNOWN must never appear in chunks");
        assert!(chunk.bytes > 0, "chunks must be non-empty");
    }
    for pair in success.chunks.windows(2) {
        assert!(pair[0].offset < pair[1].offset, "chunks must be in source order");
    }
}

/// Test fixture helper for creating temporary directories with input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a text file relative to the fixture root
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Run the built `tongues` binary with optional stdin
pub fn run_cli(args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tongues"))
        .args(args)
        .env("TONGUES_WORKERS", "2")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tongues");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(bytes) = stdin {
            pipe.write_all(bytes).expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for tongues")
}

/// Parse JSON-lines stdout into values
pub fn parse_reports(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
        .collect()
}
