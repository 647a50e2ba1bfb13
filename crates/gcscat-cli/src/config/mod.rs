//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── log_format: LogFormat      # pretty or json, always on stderr
//! ├── gcs_endpoint: Option       # alternative GCS-compatible server
//! └── command: Command           # prepare | list | fetch | schema
//! ```
//!
//! Global options can also be given through environment variables.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tokio::io::AsyncReadExt;

use crate::telemetry::LogFormat;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Reads the context from stdin when given as `--context`.
const STDIN_PATH: &str = "-";

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "gcscat")]
#[command(about = "Google Cloud Storage data catalog")]
#[command(version)]
pub struct Cli {
    /// Format of the log lines written to stderr.
    #[arg(long, global = true, env = "GCSCAT_LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,

    /// Endpoint of a GCS-compatible server to use instead of Google's.
    #[arg(long, global = true, env = "GCS_ENDPOINT")]
    pub gcs_endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Catalog operation to run.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Store the service account key and validate bucket access.
    Prepare(ContextArgs),
    /// List one folder of the bucket.
    List(ContextArgs),
    /// Download one object into the context's temporary directory.
    Fetch(ContextArgs),
    /// Print the catalog metadata and configuration schema.
    Schema,
}

impl Command {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prepare(_) => "prepare",
            Self::List(_) => "list",
            Self::Fetch(_) => "fetch",
            Self::Schema => "schema",
        }
    }
}

/// Where the JSON context of a command comes from.
#[derive(Debug, Clone, Args)]
pub struct ContextArgs {
    /// Path of the JSON context file, or `-` for stdin.
    #[arg(long, short, value_name = "PATH", default_value = STDIN_PATH)]
    pub context: PathBuf,
}

impl ContextArgs {
    /// Reads and parses the context.
    pub async fn read<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        let raw = if self.context == Path::new(STDIN_PATH) {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read context from stdin")?;
            raw
        } else {
            tokio::fs::read_to_string(&self.context)
                .await
                .with_context(|| format!("failed to read context {}", self.context.display()))?
        };

        serde_json::from_str(&raw).context("invalid context JSON")
    }
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs build information and configuration at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            command = self.command.name(),
            log_format = ?self.log_format,
            gcs_endpoint = self.gcs_endpoint.as_deref(),
            "CLI configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
