//! # OURPS Node
//!
//! Runs one team rock-paper-scissors game until Ctrl-C.

use anyhow::{Context, Result};
use tracing::info;

use ourps_node::{NodeConfig, NodeRuntime};
use ourps_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = NodeConfig::from_env()?;
    let mut runtime = NodeRuntime::new(config)?;
    runtime.start();

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    runtime.shutdown().await;

    Ok(())
}
