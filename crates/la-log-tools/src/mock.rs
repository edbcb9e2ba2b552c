//! Mock log source and analyzer for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::content::ContentAnalyzer;
use crate::error::{AccessKind, AnalysisError, LogResult};
use crate::source::LogSource;
use crate::types::LogTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockEntry {
    File,
    Directory,
    Denied,
}

/// A mock log source that answers accessibility checks from an in-memory
/// table of paths. Unknown paths are reported as not found.
pub struct MockLogSource {
    entries: HashMap<String, MockEntry>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a readable regular file.
    pub fn add_file(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), MockEntry::File);
    }

    /// Register a directory.
    pub fn add_dir(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), MockEntry::Directory);
    }

    /// Register a file that exists but cannot be opened.
    pub fn add_denied(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), MockEntry::Denied);
    }

    /// Create a mock with a few typical server logs.
    pub fn with_server_logs() -> Self {
        let mut m = Self::new();
        m.add_file("/var/log/nginx/access.log");
        m.add_file("/var/log/apache2/error.log");
        m.add_file("/var/log/app/app.log");
        m.add_dir("/var/log/nginx");
        m.add_denied("/var/log/secure");
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn check_access(&self, path: &str) -> LogResult<()> {
        match self.entries.get(path) {
            Some(MockEntry::File) => Ok(()),
            Some(MockEntry::Directory) => Err(AnalysisError::file_access(
                path,
                AccessKind::NotRegularFile,
                "not a regular file",
            )),
            Some(MockEntry::Denied) => Err(AnalysisError::file_access(
                path,
                AccessKind::Denied,
                "cannot read file: permission denied",
            )),
            None => Err(AnalysisError::file_access(
                path,
                AccessKind::NotFound,
                "no such file or directory",
            )),
        }
    }
}

/// A content analyzer whose outcome is fixed per log id.
///
/// Records every invocation and the peak number of analyses running at
/// once, so tests can check fan-out behavior.
pub struct ScriptedAnalyzer {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedAnalyzer {
    pub fn new() -> Self {
        Self {
            failing: HashSet::new(),
            panicking: HashSet::new(),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Make the analysis of `log_id` fail with a parse error.
    pub fn fail_on(mut self, log_id: impl Into<String>) -> Self {
        self.failing.insert(log_id.into());
        self
    }

    /// Make the analysis of `log_id` panic.
    pub fn panic_on(mut self, log_id: impl Into<String>) -> Self {
        self.panicking.insert(log_id.into());
        self
    }

    /// Sleep this long inside every analysis.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Log ids analyzed so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Highest number of analyses observed running concurrently.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentAnalyzer for ScriptedAnalyzer {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn analyze(&self, task: &LogTask) -> LogResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(task.id.clone());
        }
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.panicking.contains(&task.id) {
            panic!("scripted panic for log {}", task.id);
        }
        if self.failing.contains(&task.id) {
            return Err(AnalysisError::parse(
                &task.id,
                "scripted parsing failure",
                "unexpected token",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_file_is_accessible() {
        let source = MockLogSource::with_server_logs();
        assert!(source.check_access("/var/log/nginx/access.log").await.is_ok());
    }

    #[tokio::test]
    async fn mock_unknown_path_is_not_found() {
        let source = MockLogSource::new();
        let err = source.check_access("/nonexistent").await.unwrap_err();
        assert_eq!(err.category(), "File not found.");
    }

    #[tokio::test]
    async fn mock_dir_and_denied() {
        let source = MockLogSource::with_server_logs();
        let dir = source.check_access("/var/log/nginx").await.unwrap_err();
        assert_eq!(dir.category(), "File not found.");
        let denied = source.check_access("/var/log/secure").await.unwrap_err();
        assert_eq!(denied.category(), "File access error.");
    }

    #[tokio::test]
    async fn scripted_analyzer_records_calls() {
        let analyzer = ScriptedAnalyzer::new().fail_on("bad");
        assert!(analyzer.analyze(&LogTask::new("good", "/a", "t")).await.is_ok());
        assert!(analyzer.analyze(&LogTask::new("bad", "/b", "t")).await.is_err());
        assert_eq!(analyzer.calls(), vec!["good", "bad"]);
        assert_eq!(analyzer.peak_in_flight(), 1);
    }
}
