//! Core types: the log task descriptor and the per-task outcome record.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

// ── Message categories ────────────────────────────────────────

pub const SUCCESS_MESSAGE: &str = "Analysis completed successfully.";
pub const FILE_NOT_FOUND_MESSAGE: &str = "File not found.";
pub const FILE_ACCESS_ERROR_MESSAGE: &str = "File access error.";
pub const PARSE_ERROR_MESSAGE: &str = "Parse error occurred.";
pub const ABORTED_MESSAGE: &str = "Analysis aborted.";

// ── Log Task ──────────────────────────────────────────────────

/// One log source to analyze, as declared in the configuration document.
///
/// Missing fields deserialize as empty strings so that validation can
/// report which entry is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTask {
    /// Unique, non-empty identifier.
    #[serde(default)]
    pub id: String,
    /// Filesystem location of the log file.
    #[serde(default)]
    pub path: String,
    /// Free-form format label (e.g. "nginx").
    #[serde(rename = "type", default)]
    pub log_type: String,
}

impl LogTask {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        log_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            log_type: log_type.into(),
        }
    }
}

// ── Analysis Status ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILURE")]
    Failure,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Failure => "FAILURE",
        }
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Analysis Result ───────────────────────────────────────────

/// Outcome of analyzing one log task. Exactly one is produced per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub log_id: String,
    pub file_path: String,
    pub status: AnalysisStatus,
    /// Human-readable message category.
    pub message: String,
    /// Underlying error text; empty when status is OK.
    pub error_details: String,
}

impl AnalysisResult {
    pub fn success(log_id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            log_id: log_id.into(),
            file_path: file_path.into(),
            status: AnalysisStatus::Ok,
            message: SUCCESS_MESSAGE.to_string(),
            error_details: String::new(),
        }
    }

    pub fn failure(
        log_id: impl Into<String>,
        file_path: impl Into<String>,
        message: impl Into<String>,
        error_details: impl Into<String>,
    ) -> Self {
        Self {
            log_id: log_id.into(),
            file_path: file_path.into(),
            status: AnalysisStatus::Failure,
            message: message.into(),
            error_details: error_details.into(),
        }
    }

    /// Build the FAILURE record for `task` from the error that ended it.
    pub fn from_error(task: &LogTask, err: &AnalysisError) -> Self {
        Self::failure(&task.id, &task.path, err.category(), err.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.status == AnalysisStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessKind;

    #[test]
    fn task_deserializes_type_field() {
        let task: LogTask =
            serde_json::from_str(r#"{"id":"log1","path":"/var/log/app.log","type":"nginx"}"#)
                .unwrap();
        assert_eq!(task, LogTask::new("log1", "/var/log/app.log", "nginx"));
    }

    #[test]
    fn task_missing_fields_default_to_empty() {
        let task: LogTask = serde_json::from_str(r#"{"path":"/var/log/app.log"}"#).unwrap();
        assert!(task.id.is_empty());
        assert!(task.log_type.is_empty());
    }

    #[test]
    fn success_record() {
        let result = AnalysisResult::success("log1", "/var/log/test1.log");
        assert_eq!(result.status, AnalysisStatus::Ok);
        assert_eq!(result.message, "Analysis completed successfully.");
        assert!(result.error_details.is_empty());
        assert!(result.is_success());
    }

    #[test]
    fn failure_from_error() {
        let task = LogTask::new("log2", "/missing.log", "apache");
        let err = AnalysisError::file_access("/missing.log", AccessKind::NotFound, "gone");
        let result = AnalysisResult::from_error(&task, &err);
        assert_eq!(result.status, AnalysisStatus::Failure);
        assert_eq!(result.log_id, "log2");
        assert_eq!(result.file_path, "/missing.log");
        assert_eq!(result.message, "File not found.");
        assert!(result.error_details.contains("gone"));
    }

    #[test]
    fn status_serializes_uppercase() {
        let result = AnalysisResult::failure("log1", "/a.log", "Test error", "Error details");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "FAILURE");
        assert_eq!(json["log_id"], "log1");
        assert_eq!(json["error_details"], "Error details");
    }
}
