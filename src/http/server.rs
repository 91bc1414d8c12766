//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with all gateway routes
//! - Wire up middleware (request ID, tracing, inbound timeout)
//! - Dispatch /api/flow to the aggregator
//! - Dispatch /api/<resource> to the proxy dispatcher
//! - Serve with graceful shutdown; spawn the health monitor

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::aggregate::Aggregator;
use crate::config::GatewayConfig;
use crate::downstream::{DownstreamClient, ServiceEndpoint, ServiceInfo};
use crate::health::HealthMonitor;
use crate::http::request::MakeRequestUuid;
use crate::identity::GatewayIdentity;
use crate::observability::metrics;
use crate::proxy::{ProxyDispatcher, ProxyTarget};

/// Error body for a failed flow aggregation.
const FLOW_FETCH_ERROR: &str = "Failed to fetch downstream service info";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub dispatcher: Arc<ProxyDispatcher>,
    pub targets: Arc<HashMap<String, ProxyTarget>>,
    pub identity: GatewayIdentity,
}

/// HTTP server for the edge gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    client: DownstreamClient,
    endpoints: Vec<ServiceEndpoint>,
}

impl HttpServer {
    /// Create a new HTTP server over a validated configuration.
    pub fn new(
        config: GatewayConfig,
        identity: GatewayIdentity,
        client: DownstreamClient,
    ) -> Self {
        let endpoints: Vec<ServiceEndpoint> = config
            .services
            .iter()
            .map(ServiceEndpoint::from_config)
            .collect();

        let aggregator = Aggregator::new(client.clone(), identity.clone(), endpoints.clone());
        let dispatcher = ProxyDispatcher::new(client.clone());
        let targets = ProxyTarget::table(&config.services);

        let state = AppState {
            aggregator: Arc::new(aggregator),
            dispatcher: Arc::new(dispatcher),
            targets: Arc::new(targets),
            identity,
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            client,
            endpoints,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/health", get(health_handler))
            .route("/api/info", get(info_handler))
            .route("/api/flow", get(flow_handler))
            .route(
                "/api/{resource}",
                get(proxy_get_handler).post(proxy_post_handler),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after the shutdown signal fires and in-flight requests
    /// drain. In-flight downstream calls are abandoned, not cancelled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        if self.config.health_check.enabled {
            let monitor = HealthMonitor::new(
                self.client.clone(),
                self.endpoints.clone(),
                self.config.health_check.clone(),
            );
            let monitor_shutdown = shutdown.resubscribe();
            tokio::spawn(async move {
                monitor.run(monitor_shutdown).await;
            });
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Liveness probe.
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "OK", "service": state.identity.service() }))
}

/// Gateway self-description.
async fn info_handler(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.identity.describe())
}

/// Aggregated flow view over all configured downstream services.
async fn flow_handler(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    match state.aggregator.aggregate().await {
        Ok(view) => {
            metrics::record_request("GET", "/api/flow", 200, start);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Flow aggregation failed");
            metrics::record_request("GET", "/api/flow", 500, start);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FLOW_FETCH_ERROR })),
            )
                .into_response()
        }
    }
}

/// Relay a collection fetch to the owning service.
async fn proxy_get_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Response {
    proxy(state, resource, Method::GET, None).await
}

/// Relay a create to the owning service, body passed through unmodified.
async fn proxy_post_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Response {
    proxy(state, resource, Method::POST, Some(body)).await
}

async fn proxy(
    state: AppState,
    resource: String,
    method: Method,
    body: Option<Bytes>,
) -> Response {
    let start = Instant::now();
    let route = format!("/api/{resource}");
    let method_label = method.as_str().to_string();

    let Some(target) = state.targets.get(&resource) else {
        tracing::warn!(resource = %resource, "No proxy target for resource");
        metrics::record_request(&method_label, &route, 404, start);
        return (StatusCode::NOT_FOUND, "No matching route found").into_response();
    };

    let (status, body) = state.dispatcher.dispatch(target, method, body).await;
    metrics::record_request(&method_label, &route, status.as_u16(), start);
    (status, Json(body)).into_response()
}
