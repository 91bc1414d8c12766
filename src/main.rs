//! Edge Gateway
//!
//! A minimal API gateway built with Tokio and Axum, fronting two
//! independent backing services.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 EDGE GATEWAY                  │
//!                      │                                               │
//!   GET /api/flow      │  ┌────────┐   ┌────────────┐                 │
//!   ──────────────────▶│  │  http  │──▶│ aggregate  │── fan-out ──────┼──▶ user-service /info
//!                      │  │ server │   │ (join all) │── (concurrent) ─┼──▶ project-service /info
//!                      │  └────────┘   └────────────┘                 │
//!                      │                                               │
//!   /api/users         │  ┌────────┐   ┌────────────┐                 │
//!   /api/projects ────▶│  │  http  │──▶│   proxy    │── one call ─────┼──▶ owning service
//!                      │  │ server │   │ dispatcher │                 │
//!                      │  └────────┘   └────────────┘                 │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  config · identity · health probes ·     │ │
//!                      │  │  observability · lifecycle               │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! The gateway holds no persistent state; it is a pure request-shaping
//! and fan-out layer.

use std::path::Path;

use tokio::net::TcpListener;

use edge_gateway::config::{load_config, GatewayConfig};
use edge_gateway::downstream::DownstreamClient;
use edge_gateway::observability::{logging, metrics};
use edge_gateway::{GatewayIdentity, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("edge_gateway=debug,tower_http=debug");

    tracing::info!("edge-gateway v0.1.0 starting");

    // Config file via GATEWAY_CONFIG, otherwise the stock topology.
    let config = match std::env::var("GATEWAY_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => GatewayConfig::with_default_services(),
    };

    let identity = GatewayIdentity::from_config(&config.identity);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        pod = %identity.pod(),
        services = config.services.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let client = DownstreamClient::new(&config.timeouts)?;
    let server = HttpServer::new(config, identity, client);

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
