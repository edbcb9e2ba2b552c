//! Whole-run error types.
//!
//! Per-file failures never show up here: they are recorded as FAILURE
//! outcomes. These errors abort the run.

use std::path::PathBuf;

use thiserror::Error;

/// Problems loading the configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Semantic violations in an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no logs configured")]
    Empty,

    #[error("log entry missing ID")]
    MissingId,

    #[error("log entry {id} missing path")]
    MissingPath { id: String },

    #[error("log entry {id} missing type")]
    MissingType { id: String },

    #[error("duplicate log ID: {id}")]
    DuplicateId { id: String },
}

/// Errors from the fan-out/fan-in coordinator itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("no logs to analyze")]
    NoLogs,
}

/// Problems writing or reading a JSON report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to marshal results to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write results to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode report {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
