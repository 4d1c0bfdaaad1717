//! Entry point: parse CLI, run the predictor, report any failure as one line.

use clap::Parser;
use nba_stats::{
    cli::NbaStats, commands::predict::handle_predict, core::resolve_base_url,
    nba::http::StatsClient, Result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run the CLI. Failures are printed, never surfaced as a non-zero exit.
#[tokio::main]
async fn main() {
    init_logging();
    let app = NbaStats::parse();

    if let Err(e) = run(&app).await {
        info!(error = %e, "run ended with an error");
        println!("\nError: {e}");
    }
}

async fn run(app: &NbaStats) -> Result<()> {
    let client = StatsClient::new(resolve_base_url(None))?;
    let stdin = std::io::stdin();
    handle_predict(app, &client, stdin.lock(), std::io::stdout()).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so they never interleave with prompts on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
