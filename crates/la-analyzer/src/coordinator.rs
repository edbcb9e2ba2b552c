//! Fan-out/fan-in coordinator.
//!
//! Spawns one tokio task per log task, lets each append its outcome to a
//! shared [`ResultCollector`], and returns once every task has finished.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};

use la_log_tools::{
    AnalysisError, AnalysisResult, ContentAnalyzer, FileLogSource, LogSource, LogTask,
    SimulatedAnalyzer,
};

use crate::collector::ResultCollector;
use crate::error::RunError;
use crate::worker;

/// Tuning knobs for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerSettings {
    /// Upper bound on analyses in flight. `None` runs every task at once.
    pub max_concurrency: Option<NonZeroUsize>,
}

/// Runs analyses for a list of log tasks concurrently.
///
/// Generic over log source and content analyzer for testability.
pub struct Analyzer {
    source: Arc<dyn LogSource>,
    content: Arc<dyn ContentAnalyzer>,
    settings: AnalyzerSettings,
}

impl Analyzer {
    pub fn new(source: Arc<dyn LogSource>, content: Arc<dyn ContentAnalyzer>) -> Self {
        Self {
            source,
            content,
            settings: AnalyzerSettings::default(),
        }
    }

    /// Filesystem source with the simulated analysis step.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(FileLogSource), Arc::new(SimulatedAnalyzer::default()))
    }

    pub fn with_settings(mut self, settings: AnalyzerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> AnalyzerSettings {
        self.settings
    }

    /// Analyze every task and return a fresh collector holding exactly one
    /// record per task, in arrival order.
    ///
    /// Fails before spawning anything if `tasks` is empty.
    pub async fn analyze_all(&self, tasks: &[LogTask]) -> Result<ResultCollector, RunError> {
        if tasks.is_empty() {
            return Err(RunError::NoLogs);
        }

        tracing::info!(
            count = tasks.len(),
            max_concurrency = ?self.settings.max_concurrency,
            analyzer = self.content.name(),
            "starting analysis"
        );

        let collector = ResultCollector::new();
        let limiter = self
            .settings
            .max_concurrency
            .map(|n| Arc::new(Semaphore::new(n.get())));

        let mut set = JoinSet::new();
        let mut pending: HashMap<Id, &LogTask> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let owned = task.clone();
            let source = Arc::clone(&self.source);
            let content = Arc::clone(&self.content);
            let collector = collector.clone();
            let limiter = limiter.clone();

            let handle = set.spawn(async move {
                // The semaphore is never closed, so acquisition cannot fail.
                let _permit = match limiter {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };
                let result = worker::analyze_task(&owned, source.as_ref(), content.as_ref()).await;
                collector.push(result);
            });
            pending.insert(handle.id(), task);
        }

        while let Some(joined) = set.join_next_with_id().await {
            match joined {
                Ok((id, ())) => {
                    pending.remove(&id);
                }
                Err(err) => {
                    // The task died before pushing its record; record it here
                    // so the one-record-per-task count still holds.
                    if let Some(task) = pending.remove(&err.id()) {
                        let failure = AnalysisError::Aborted {
                            log_id: task.id.clone(),
                            cause: err.to_string(),
                        };
                        tracing::error!(log_id = %task.id, error = %failure, "analysis task aborted");
                        collector.push(AnalysisResult::from_error(task, &failure));
                    }
                }
            }
        }

        tracing::info!(
            total = collector.len(),
            succeeded = collector.success_count(),
            failed = collector.failure_count(),
            "analysis finished"
        );

        Ok(collector)
    }
}
