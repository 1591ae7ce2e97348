//! Node entry point.

use anyhow::Context;
use awp_gateway::GatewayService;
use awp_runtime::{Platform, RuntimeConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RuntimeConfig::from_env().context("reading configuration")?;
    info!(?config, "starting awp node");

    let platform = Platform::build(&config);

    // The indexer must be subscribed before any enrollment can happen
    let indexer_handle = platform.spawn_indexer();

    if config.seed_demo {
        platform.seed_demo().await?;
    }

    let mut gateway = GatewayService::new(
        config.gateway.clone(),
        platform.onboard.clone(),
        platform.get_ready.clone(),
    )?;

    // Dropping the serve future on ctrl_c tears the listener down
    tokio::select! {
        result = gateway.start() => {
            result.context("gateway server")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    indexer_handle.abort();
    info!("awp node stopped");
    Ok(())
}
