//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the edge gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Process identity used in self-descriptions.
    pub identity: IdentityConfig,

    /// Downstream service definitions, in aggregation order.
    pub services: Vec<ServiceConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Downstream health probe settings.
    pub health_check: HealthCheckConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    /// Configuration preloaded with the default two-service topology.
    pub fn with_default_services() -> Self {
        Self {
            services: ServiceConfig::default_topology(),
            ..Self::default()
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Gateway process identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Service name reported in self-descriptions.
    pub service_name: String,

    /// Pod name override. When unset, the HOSTNAME environment variable
    /// is consulted, falling back to "gateway-local".
    pub pod: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            service_name: "API Gateway".to_string(),
            pod: None,
        }
    }
}

/// A single downstream service definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Logical service name (e.g., "user-service").
    pub name: String,

    /// Base URL (e.g., "http://user-service:3001").
    pub base_url: String,

    /// Resource collection owned by this service (e.g., "users").
    /// Exposed by the gateway as /api/<resource>.
    pub resource: String,

    /// Self-description route.
    #[serde(default = "default_info_path")]
    pub info_path: String,

    /// Liveness route.
    #[serde(default = "default_health_path")]
    pub health_path: String,
}

fn default_info_path() -> String {
    "/info".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

impl ServiceConfig {
    /// The stock two-service topology: users first, projects second.
    pub fn default_topology() -> Vec<Self> {
        vec![
            Self {
                name: "user-service".to_string(),
                base_url: "http://user-service:3001".to_string(),
                resource: "users".to_string(),
                info_path: default_info_path(),
                health_path: default_health_path(),
            },
            Self {
                name: "project-service".to_string(),
                base_url: "http://project-service:3002".to_string(),
                resource: "projects".to_string(),
                info_path: default_info_path(),
                health_path: default_health_path(),
            },
        ]
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Inbound request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Total deadline for a single downstream call in seconds.
    pub downstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
            downstream_secs: 10,
        }
    }
}

/// Downstream health probe configuration.
///
/// Probe outcomes are logged and exported as a gauge only; they never
/// influence routing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Enable periodic probes.
    pub enabled: bool,

    /// Probe interval in seconds.
    pub interval_secs: u64,

    /// Per-probe timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 10,
            timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
