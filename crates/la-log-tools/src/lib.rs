//! Per-file building blocks for LogAnalyzer.
//!
//! Provides the `LogTask` descriptor and `AnalysisResult` outcome record,
//! the `AnalysisError` taxonomy, a `LogSource` abstraction for checking
//! that a log file can be read, and the `ContentAnalyzer` strategy that
//! stands in for real format-specific parsing.

pub mod content;
pub mod error;
pub mod mock;
pub mod source;
pub mod types;

// Re-export key types for convenience
pub use content::{ContentAnalyzer, SimulatedAnalyzer};
pub use error::{AccessKind, AnalysisError, LogResult};
pub use mock::{MockLogSource, ScriptedAnalyzer};
pub use source::{FileLogSource, LogSource};
pub use types::{AnalysisResult, AnalysisStatus, LogTask};
