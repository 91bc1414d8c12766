//! Periodic downstream health probing.
//!
//! # Responsibilities
//! - Probe each configured service's health route on an interval
//! - Log outcomes and export the per-service health gauge
//!
//! Probes are observability only; they never influence routing.

use std::time::Duration;

use reqwest::Method;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::HealthCheckConfig;
use crate::downstream::{DownstreamClient, ServiceEndpoint};
use crate::observability::metrics;

pub struct HealthMonitor {
    client: DownstreamClient,
    endpoints: Vec<ServiceEndpoint>,
    config: HealthCheckConfig,
}

impl HealthMonitor {
    pub fn new(
        client: DownstreamClient,
        endpoints: Vec<ServiceEndpoint>,
        config: HealthCheckConfig,
    ) -> Self {
        Self {
            client,
            endpoints,
            config,
        }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if !self.config.enabled {
            tracing::info!("Health probes disabled");
            return;
        }

        tracing::info!(
            interval = self.config.interval_secs,
            services = self.endpoints.len(),
            "Health monitor starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.probe_all().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Health monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn probe_all(&self) {
        for endpoint in &self.endpoints {
            let probe = self
                .client
                .call(endpoint, Method::GET, &endpoint.routes.health, None);
            let timeout = Duration::from_secs(self.config.timeout_secs);

            let healthy = match time::timeout(timeout, probe).await {
                Ok(Ok(result)) if result.status.is_success() => true,
                Ok(Ok(result)) => {
                    tracing::warn!(
                        service = %endpoint.name,
                        status = %result.status,
                        "Health probe failed: non-success status"
                    );
                    false
                }
                Ok(Err(e)) => {
                    tracing::warn!(service = %endpoint.name, error = %e, "Health probe failed");
                    false
                }
                Err(_) => {
                    tracing::warn!(service = %endpoint.name, "Health probe failed: timeout");
                    false
                }
            };

            metrics::record_service_health(&endpoint.name, healthy);
        }
    }
}
