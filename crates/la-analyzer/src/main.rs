//! LogAnalyzer: analyze many log files concurrently from a JSON config.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use la_analyzer::cli::{Cli, Commands};
use la_analyzer::run::{self, AnalyzeOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "loganalyzer starting");

    match cli.command {
        Commands::Analyze(args) => {
            let options = AnalyzeOptions::from(args);
            let mut stdout = std::io::stdout();
            run::run_analyze(&options, &mut stdout).await?;
        }
    }

    Ok(())
}

/// Progress logs go to stderr so they never mix with the summary on stdout.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
