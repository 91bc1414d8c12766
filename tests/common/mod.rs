//! Shared utilities for integration testing.

use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use edge_gateway::config::{GatewayConfig, ServiceConfig};
use edge_gateway::downstream::DownstreamClient;
use edge_gateway::{GatewayIdentity, HttpServer, Shutdown};

/// Build a service entry pointing at a mock server.
pub fn service(name: &str, base_url: &str, resource: &str) -> ServiceConfig {
    ServiceConfig {
        name: name.to_string(),
        base_url: base_url.to_string(),
        resource: resource.to_string(),
        info_path: "/info".to_string(),
        health_path: "/health".to_string(),
    }
}

/// Gateway configuration over the given services, background tasks off.
pub fn gateway_config(services: Vec<ServiceConfig>) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.services = services;
    config.identity.pod = Some("gw-test".to_string());
    config.health_check.enabled = false;
    config.observability.metrics_enabled = false;
    config
}

/// Start a gateway on an ephemeral port.
///
/// The listener is bound before the server task is spawned, so requests
/// can be issued immediately.
pub async fn spawn_gateway(config: GatewayConfig) -> (String, Shutdown) {
    let identity = GatewayIdentity::from_config(&config.identity);
    let client = DownstreamClient::new(&config.timeouts).unwrap();
    let server = HttpServer::new(config, identity, client);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// Mount GET /info returning a fixed self-description.
#[allow(dead_code)]
pub async fn mount_info(server: &MockServer, service: &str, pod: &str, timestamp: &str) {
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "service": service,
            "pod": pod,
            "timestamp": timestamp,
        })))
        .mount(server)
        .await;
}
