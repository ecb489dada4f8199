//! fleetsimd -- serves the synthetic fleet telemetry API.

use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fleetsim::api;
use fleetsim::{FleetConfig, FleetSimulator};

const DEFAULT_LISTEN: &str = "127.0.0.1:7786";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = env::var("FLEETSIM_LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
    let config = FleetConfig::default();
    tracing::info!(
        "Simulating a fleet of {} machines (seed {})",
        config.roster.len(),
        config.seed
    );

    api::serve(&addr, FleetSimulator::new(config)).await
}
