#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;
mod telemetry;

use std::process;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "gcscat_cli::startup";
pub const TRACING_TARGET_COMMAND: &str = "gcscat_cli::command";
pub const TRACING_TARGET_CONFIG: &str = "gcscat_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_COMMAND,
            error = %format!("{error:#}"),
            "command failed"
        );
    }

    // The outermost message is the one meant for users.
    eprintln!("Error: {error}");
    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing(cli.log_format)?;
    cli.log();

    let output = command::execute(&cli).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
