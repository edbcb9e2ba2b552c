//! LogAnalyzer: library crate for concurrent log file analysis.
//!
//! Re-exports all modules so the binary and external crates (e.g.
//! `la-e2e-tests`) can drive a run without going through the CLI.

pub mod cli;
pub mod collector;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod output;
pub mod run;
pub mod worker;

pub use collector::ResultCollector;
pub use config::AnalysisConfig;
pub use coordinator::{Analyzer, AnalyzerSettings};
pub use error::{ConfigError, ReportError, RunError, ValidationError};
pub use run::{AnalyzeOptions, RunSummary, run_analyze, run_analyze_with};
