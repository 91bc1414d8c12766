//! Downstream health probing.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use edge_gateway::config::{HealthCheckConfig, ServiceConfig, TimeoutConfig};
use edge_gateway::downstream::{DownstreamClient, ServiceEndpoint};
use edge_gateway::health::HealthMonitor;
use edge_gateway::Shutdown;

fn endpoint_for(server: &MockServer) -> ServiceEndpoint {
    ServiceEndpoint::from_config(&ServiceConfig {
        name: "user-service".to_string(),
        base_url: server.uri(),
        resource: "users".to_string(),
        info_path: "/info".to_string(),
        health_path: "/health".to_string(),
    })
}

#[tokio::test]
async fn test_monitor_probes_health_route_and_stops_on_shutdown() {
    let service = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "OK", "service": "User Service" })),
        )
        .expect(1..)
        .mount(&service)
        .await;

    let client = DownstreamClient::new(&TimeoutConfig::default()).unwrap();
    let monitor = HealthMonitor::new(
        client,
        vec![endpoint_for(&service)],
        HealthCheckConfig {
            enabled: true,
            interval_secs: 1,
            timeout_secs: 1,
        },
    );

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        monitor.run(rx).await;
    });

    // First tick fires immediately.
    tokio::time::sleep(Duration::from_millis(300)).await;
    shutdown.trigger();
    handle.await.unwrap();

    // expect(1..) is verified when the mock server drops.
}

#[tokio::test]
async fn test_disabled_monitor_returns_without_probing() {
    let service = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .expect(0)
        .mount(&service)
        .await;

    let client = DownstreamClient::new(&TimeoutConfig::default()).unwrap();
    let monitor = HealthMonitor::new(
        client,
        vec![endpoint_for(&service)],
        HealthCheckConfig {
            enabled: false,
            interval_secs: 1,
            timeout_secs: 1,
        },
    );

    let shutdown = Shutdown::new();
    monitor.run(shutdown.subscribe()).await;
}
