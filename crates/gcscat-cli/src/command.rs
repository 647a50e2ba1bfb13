//! Dispatch of CLI subcommands to the catalog.

use gcscat_catalog::GcsCatalog;
use gcscat_catalog::config::{FetchContext, ListContext, PrepareContext};
use gcscat_catalog::connector::GcsConnector;
use gcscat_catalog::metadata::config_schema;
use gcscat_catalog::progress::TracingProgress;
use serde_json::{Value, json};

use crate::TRACING_TARGET_COMMAND;
use crate::config::{Cli, Command};

/// Runs the selected command and returns its JSON output.
///
/// Catalog errors are returned without added context so their fixed message
/// stays the outermost one.
#[tracing::instrument(target = TRACING_TARGET_COMMAND, skip_all, fields(command = cli.command.name()))]
pub async fn execute(cli: &Cli) -> anyhow::Result<Value> {
    let catalog = GcsCatalog::with_connector(connector(cli));

    let output = match &cli.command {
        Command::Prepare(args) => {
            let context: PrepareContext = args.read().await?;
            serde_json::to_value(catalog.prepare(context).await?)?
        }
        Command::List(args) => {
            let context: ListContext = args.read().await?;
            serde_json::to_value(catalog.list_resources(context).await?)?
        }
        Command::Fetch(args) => {
            let context: FetchContext = args.read().await?;
            serde_json::to_value(catalog.get_resource(context, &TracingProgress).await?)?
        }
        Command::Schema => json!({
            "metadata": catalog.metadata(),
            "configSchema": config_schema(),
        }),
    };

    tracing::info!(target: TRACING_TARGET_COMMAND, "command completed");
    Ok(output)
}

fn connector(cli: &Cli) -> GcsConnector {
    match &cli.gcs_endpoint {
        Some(endpoint) => GcsConnector::new().with_endpoint(endpoint),
        None => GcsConnector::new(),
    }
}
