//! Bolt Fleet Integration CLI
//!
//! Runs one read query against the Fleet Integration API and prints the
//! records as a JSON array on stdout. Logs go to stderr as JSON.

mod cli;
mod config;

use anyhow::{Context, Result};
use fleet_client::FleetClient;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Command, Resource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = cli::parse(&args)?;

    let credentials = config::load_credentials(command.config.as_deref())
        .context("failed to load Bolt credentials")?;
    info!(api_url = %credentials.api_url, "credentials loaded");

    let mut client = FleetClient::new(credentials)
        .await
        .context("failed to authenticate with Bolt")?;

    let output = run(&mut client, &command).await?;
    println!("{output}");
    Ok(())
}

/// Execute the query and render the records as pretty JSON.
async fn run(client: &mut FleetClient, command: &Command) -> Result<String> {
    let Command {
        offset,
        limit,
        start_ts,
        end_ts,
        status,
        ..
    } = *command;

    let rendered = match command.resource {
        Resource::Orders => {
            let orders = client
                .get_fleet_orders(offset, limit, &command.company_ids, start_ts, end_ts)
                .await
                .context("fetching fleet orders")?;
            info!(count = orders.len(), "fetched fleet orders");
            serde_json::to_string_pretty(&orders)?
        }
        Resource::Vehicles => {
            let vehicles = client
                .get_vehicles(offset, limit, command.company_id()?, status, start_ts, end_ts)
                .await
                .context("fetching vehicles")?;
            info!(count = vehicles.len(), "fetched vehicles");
            serde_json::to_string_pretty(&vehicles)?
        }
        Resource::Drivers => {
            let drivers = client
                .get_drivers(offset, limit, command.company_id()?, status, start_ts, end_ts)
                .await
                .context("fetching drivers")?;
            info!(count = drivers.len(), "fetched drivers");
            serde_json::to_string_pretty(&drivers)?
        }
        Resource::StateLogs => {
            let logs = client
                .get_fleet_state_logs(offset, limit, command.company_id()?, start_ts, end_ts)
                .await
                .context("fetching fleet state logs")?;
            info!(count = logs.len(), "fetched fleet state logs");
            serde_json::to_string_pretty(&logs)?
        }
    };
    Ok(rendered)
}
