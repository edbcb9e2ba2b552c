//! Shared test harness for E2E integration tests.
//!
//! Builds a throwaway directory of log files plus a JSON configuration
//! document pointing at them, then drives real runs through the library.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use la_analyzer::run::{AnalyzeOptions, RunSummary, run_analyze_with};
use la_log_tools::{ContentAnalyzer, FileLogSource, LogTask, ScriptedAnalyzer};

/// A temp workspace holding log files and the config that lists them.
pub struct TestHarness {
    pub dir: TempDir,
    pub tasks: Vec<LogTask>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            tasks: Vec::new(),
        }
    }

    /// Two-entry setup: one readable nginx log, one path that does not exist.
    pub fn with_existing_and_missing() -> Self {
        let mut h = Self::new();
        h.add_log_file(
            "log1",
            "access.log",
            "nginx",
            r#"192.168.1.1 - - [01/Jan/2024:00:00:00 +0000] "GET / HTTP/1.1" 200 1234 "-" "Mozilla/5.0""#,
        );
        h.add_missing("log2", "nonexistent.log", "nginx");
        h
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a log file and register a task for it.
    pub fn add_log_file(&mut self, id: &str, name: &str, log_type: &str, contents: &str) {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        self.tasks.push(task(id, &path, log_type));
    }

    /// Register a task whose path is never created.
    pub fn add_missing(&mut self, id: &str, name: &str, log_type: &str) {
        let path = self.path(name);
        self.tasks.push(task(id, &path, log_type));
    }

    /// Create a directory and register a task pointing at it.
    pub fn add_directory(&mut self, id: &str, name: &str) {
        let path = self.path(name);
        std::fs::create_dir_all(&path).unwrap();
        self.tasks.push(task(id, &path, "syslog"));
    }

    /// Write the configuration document and return its path.
    pub fn write_config(&self) -> PathBuf {
        let path = self.path("config.json");
        std::fs::write(&path, serde_json::to_string_pretty(&self.tasks).unwrap()).unwrap();
        path
    }

    pub fn options(&self, output: Option<&str>) -> AnalyzeOptions {
        AnalyzeOptions {
            config_path: self.write_config(),
            output_path: output.map(|name| self.path(name)),
            max_concurrency: None,
        }
    }

    /// Run against the real filesystem with the given content analyzer.
    pub async fn run_with(
        &self,
        options: &AnalyzeOptions,
        content: Arc<dyn ContentAnalyzer>,
    ) -> (anyhow::Result<RunSummary>, String) {
        let mut out = Vec::new();
        let result = run_analyze_with(options, Arc::new(FileLogSource), content, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    /// Run with an analyzer that never injects parse failures.
    pub async fn run(&self, options: &AnalyzeOptions) -> (anyhow::Result<RunSummary>, String) {
        self.run_with(options, Arc::new(ScriptedAnalyzer::new())).await
    }
}

fn task(id: &str, path: &Path, log_type: &str) -> LogTask {
    LogTask::new(id, path.to_string_lossy(), log_type)
}
