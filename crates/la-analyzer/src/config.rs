//! Analysis configuration, loaded from a JSON array of log entries.

use std::collections::HashSet;
use std::path::Path;

use la_log_tools::LogTask;

use crate::error::{ConfigError, ValidationError};

/// The set of log files to analyze in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub logs: Vec<LogTask>,
}

impl AnalysisConfig {
    /// Load and validate config from a JSON file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let logs: Vec<LogTask> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self { logs };
        config.validate()?;
        Ok(config)
    }

    /// Check that the list is non-empty, every field is present and ids
    /// are unique. Stops at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.logs.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut ids = HashSet::new();
        for log in &self.logs {
            if log.id.is_empty() {
                return Err(ValidationError::MissingId);
            }
            if log.path.is_empty() {
                return Err(ValidationError::MissingPath { id: log.id.clone() });
            }
            if log.log_type.is_empty() {
                return Err(ValidationError::MissingType { id: log.id.clone() });
            }
            if !ids.insert(log.id.as_str()) {
                return Err(ValidationError::DuplicateId { id: log.id.clone() });
            }
        }
        Ok(())
    }
}
