//! deployctl - inspect and configure serverless deployments

use std::process::ExitCode;

use clap::Parser;
use deployctl_cli::cli::Cli;
use deployctl_cli::domain::error_code;
use deployctl_cli::output::json;
use tracing_subscriber::EnvFilter;

/// Log filter for diagnostics written to stderr.
const LOG_ENV: &str = "DEPLOYCTL_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let message = format!("{e:#}");
            match json_mode.then(|| json::format_error(&message, error_code(&e))) {
                Some(Ok(body)) => println!("{body}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}
