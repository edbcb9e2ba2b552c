//! Wiring for one `analyze` run: config → coordinator → summary → report.

use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use la_log_tools::{
    AnalysisResult, ContentAnalyzer, FileLogSource, LogSource, SimulatedAnalyzer,
};

use crate::config::AnalysisConfig;
use crate::coordinator::{Analyzer, AnalyzerSettings};
use crate::output;

/// Everything a run needs, built once from the parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub config_path: PathBuf,
    /// Report location before date decoration. `None` or empty skips the report.
    pub output_path: Option<PathBuf>,
    pub max_concurrency: Option<NonZeroUsize>,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results: Vec<AnalysisResult>,
    /// Decorated path the report was written to, if any.
    pub report_path: Option<PathBuf>,
}

/// Run against the filesystem with the simulated analysis step.
pub async fn run_analyze<W: Write + ?Sized>(
    options: &AnalyzeOptions,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    run_analyze_with(
        options,
        Arc::new(FileLogSource),
        Arc::new(SimulatedAnalyzer::default()),
        out,
    )
    .await
}

/// Run with an explicit log source and content analyzer.
///
/// Per-file failures end up in the summary; only configuration, empty
/// input and report-writing problems are returned as errors.
pub async fn run_analyze_with<W: Write + ?Sized>(
    options: &AnalyzeOptions,
    source: Arc<dyn LogSource>,
    content: Arc<dyn ContentAnalyzer>,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    writeln!(
        out,
        "Loading configuration from: {}",
        options.config_path.display()
    )?;
    let config = AnalysisConfig::from_file(&options.config_path)
        .context("failed to load configuration")?;
    writeln!(
        out,
        "Loaded configuration with {} log files",
        config.logs.len()
    )?;

    let analyzer = Analyzer::new(source, content).with_settings(AnalyzerSettings {
        max_concurrency: options.max_concurrency,
    });

    writeln!(out, "Starting analysis of {} log files...", config.logs.len())?;
    let collector = analyzer
        .analyze_all(&config.logs)
        .await
        .context("analysis failed")?;

    collector.write_summary(out)?;

    let report_path = match options.output_path.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => {
            let decorated = output::decorate_with_today(path);
            collector
                .save_to_file(&decorated)
                .context("failed to save results")?;
            writeln!(out, "Analysis results saved to: {}", decorated.display())?;
            Some(decorated)
        }
        _ => None,
    };

    writeln!(out, "\nAnalysis completed successfully!")?;

    Ok(RunSummary {
        results: collector.results(),
        report_path,
    })
}
