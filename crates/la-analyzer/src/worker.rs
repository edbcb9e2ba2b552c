//! Per-task analyzer: turns one log task into exactly one outcome record.
//!
//! Runs the accessibility check, then the content analysis step. Any
//! failure is converted into a FAILURE record here and never propagates
//! to the coordinator.

use la_log_tools::{AnalysisError, AnalysisResult, ContentAnalyzer, LogSource, LogTask};

/// Analyze a single log task.
pub async fn analyze_task(
    task: &LogTask,
    source: &dyn LogSource,
    content: &dyn ContentAnalyzer,
) -> AnalysisResult {
    tracing::info!(
        log_id = %task.id,
        path = %task.path,
        log_type = %task.log_type,
        "processing log"
    );

    match check_and_analyze(task, source, content).await {
        Ok(()) => {
            tracing::info!(
                log_id = %task.id,
                analyzer = content.name(),
                "completed analysis"
            );
            AnalysisResult::success(&task.id, &task.path)
        }
        Err(err) => {
            match &err {
                AnalysisError::FileAccess { kind, .. } => {
                    tracing::warn!(log_id = %task.id, kind = ?kind, error = %err, "file error");
                }
                AnalysisError::Parse { .. } => {
                    tracing::warn!(log_id = %task.id, error = %err, "parse error");
                }
                AnalysisError::Aborted { .. } => {
                    tracing::error!(log_id = %task.id, error = %err, "analysis aborted");
                }
            }
            AnalysisResult::from_error(task, &err)
        }
    }
}

async fn check_and_analyze(
    task: &LogTask,
    source: &dyn LogSource,
    content: &dyn ContentAnalyzer,
) -> Result<(), AnalysisError> {
    source.check_access(&task.path).await?;
    content.analyze(task).await
}
