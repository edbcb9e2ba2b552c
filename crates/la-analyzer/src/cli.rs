//! Command-line surface.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::run::AnalyzeOptions;

const LONG_ABOUT: &str = "\
LogAnalyzer is a command-line tool designed to help system administrators
analyze log files from various sources (servers, applications) in parallel.

It provides concurrent processing of multiple log files with robust error handling
and JSON-based configuration and reporting capabilities.";

const ANALYZE_LONG_ABOUT: &str = "\
The analyze command processes multiple log files concurrently based on a JSON
configuration file and prints a summary to the console. Per-file failures
(missing files, unreadable files, parse errors) are reported but do not fail
the run. Results can optionally be written to a JSON report whose file name
is prefixed with the current date (YYMMDD_).";

const ANALYZE_EXAMPLES: &str = "\
Examples:
  # Analyze logs with config file only
  loganalyzer analyze --config config.json

  # Analyze logs and save results to file (with date prefix)
  loganalyzer analyze --config config.json --output report.json
  # Output will be saved as: YYMMDD_report.json (e.g., 240524_report.json)

  # Using short flags, at most 8 files at a time
  loganalyzer analyze -c config.json -o report.json -j 8";

#[derive(Debug, Parser)]
#[command(name = "loganalyzer")]
#[command(version = "1.0.0")]
#[command(about = "A distributed log analysis tool", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Emit progress logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze log files based on JSON configuration
    #[command(long_about = ANALYZE_LONG_ABOUT, after_help = ANALYZE_EXAMPLES)]
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config: PathBuf,

    /// Path to JSON output file (date prefix is added)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of log files analyzed at once (default: all)
    #[arg(short = 'j', long)]
    pub max_concurrency: Option<NonZeroUsize>,
}

impl From<AnalyzeArgs> for AnalyzeOptions {
    fn from(args: AnalyzeArgs) -> Self {
        Self {
            config_path: args.config,
            output_path: args.output,
            max_concurrency: args.max_concurrency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_and_about() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "loganalyzer");
        assert_eq!(cmd.get_version(), Some("1.0.0"));
        assert!(cmd.get_about().is_some());
        assert!(cmd.get_long_about().is_some());
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from([
            "loganalyzer",
            "analyze",
            "--config",
            "config.json",
            "--output",
            "report.json",
        ])
        .unwrap();
        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert!(args.max_concurrency.is_none());
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::try_parse_from([
            "loganalyzer", "analyze", "-c", "c.json", "-o", "r.json", "-j", "4",
        ])
        .unwrap();
        let Commands::Analyze(args) = cli.command;
        let options = AnalyzeOptions::from(args);
        assert_eq!(options.config_path, PathBuf::from("c.json"));
        assert_eq!(options.max_concurrency, NonZeroUsize::new(4));
    }

    #[test]
    fn config_flag_is_required() {
        let err = Cli::try_parse_from(["loganalyzer", "analyze"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let result = Cli::try_parse_from(["loganalyzer", "analyze", "-c", "c.json", "-j", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_json_is_global() {
        let cli =
            Cli::try_parse_from(["loganalyzer", "analyze", "-c", "c.json", "--log-json"]).unwrap();
        assert!(cli.log_json);
    }
}
