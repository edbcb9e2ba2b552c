//! Per-task analysis error types.
//!
//! Every variant is terminal for the task that produced it: the analyzer
//! converts it into a FAILURE outcome record instead of propagating it.

use thiserror::Error;

use crate::types::{
    ABORTED_MESSAGE, FILE_ACCESS_ERROR_MESSAGE, FILE_NOT_FOUND_MESSAGE, PARSE_ERROR_MESSAGE,
};

/// Why a log file failed the accessibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Nothing exists at the path.
    NotFound,
    /// The path exists but is a directory, socket, fifo, etc.
    NotRegularFile,
    /// Permission denied or any other I/O failure while probing the file.
    Denied,
}

/// Errors that can end the analysis of a single log file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("file not found or inaccessible: {path}: {cause}")]
    FileAccess {
        path: String,
        kind: AccessKind,
        cause: String,
    },

    #[error("parse error for log {log_id}: {message}: {cause}")]
    Parse {
        log_id: String,
        message: String,
        cause: String,
    },

    #[error("analysis of log {log_id} aborted: {cause}")]
    Aborted { log_id: String, cause: String },
}

impl AnalysisError {
    pub fn file_access(path: impl Into<String>, kind: AccessKind, cause: impl ToString) -> Self {
        Self::FileAccess {
            path: path.into(),
            kind,
            cause: cause.to_string(),
        }
    }

    pub fn parse(
        log_id: impl Into<String>,
        message: impl Into<String>,
        cause: impl ToString,
    ) -> Self {
        Self::Parse {
            log_id: log_id.into(),
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    /// Message category recorded in the outcome record for this error.
    pub fn category(&self) -> &'static str {
        match self {
            Self::FileAccess {
                kind: AccessKind::NotFound | AccessKind::NotRegularFile,
                ..
            } => FILE_NOT_FOUND_MESSAGE,
            Self::FileAccess {
                kind: AccessKind::Denied,
                ..
            } => FILE_ACCESS_ERROR_MESSAGE,
            Self::Parse { .. } => PARSE_ERROR_MESSAGE,
            Self::Aborted { .. } => ABORTED_MESSAGE,
        }
    }
}

/// Convenience alias for per-task results.
pub type LogResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_non_regular_files_share_a_category() {
        let missing = AnalysisError::file_access("/x.log", AccessKind::NotFound, "no such file");
        let dir = AnalysisError::file_access("/var", AccessKind::NotRegularFile, "not a regular file");
        assert_eq!(missing.category(), "File not found.");
        assert_eq!(dir.category(), "File not found.");
    }

    #[test]
    fn denied_is_an_access_error() {
        let err = AnalysisError::file_access("/root/x.log", AccessKind::Denied, "permission denied");
        assert_eq!(err.category(), "File access error.");
    }

    #[test]
    fn display_keeps_underlying_cause() {
        let err = AnalysisError::parse("log1", "simulated parsing failure", "random parse error");
        assert_eq!(err.category(), "Parse error occurred.");
        let text = err.to_string();
        assert!(text.contains("log1"));
        assert!(text.contains("random parse error"));

        let err = AnalysisError::file_access("/x.log", AccessKind::NotFound, "No such file");
        assert_eq!(
            err.to_string(),
            "file not found or inaccessible: /x.log: No such file"
        );
    }
}
