//! Rustour - Motorcycle Touring Companion
//!
//! Main entry point: bootstraps the route intelligence engine over the
//! persisted ride history and reports its state.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustour::storage::config;
use rustour::RouteIntelligenceEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rustour v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config()?;
    let engine = RouteIntelligenceEngine::open(config.history_path());

    tracing::info!("Loaded {} recorded rides", engine.vectors().len());
    for cluster in engine.clusters() {
        tracing::info!(
            "Cluster {} \"{}\": {} rides",
            cluster.id,
            cluster.label,
            cluster.member_route_names.len()
        );
    }

    Ok(())
}
