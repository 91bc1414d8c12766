//! Downstream service types and error definitions.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::ServiceConfig;

/// An addressable downstream service.
///
/// Built from configuration at startup and immutable for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    /// Logical service name (e.g., "user-service").
    pub name: String,
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Routes the service is known to expose.
    pub routes: ServiceRoutes,
}

/// Routes exposed by a downstream service.
#[derive(Debug, Clone)]
pub struct ServiceRoutes {
    /// Self-description route.
    pub info: String,
    /// Liveness route.
    pub health: String,
    /// Resource collection route (e.g., "/users").
    pub resource: String,
}

impl ServiceEndpoint {
    /// Build an endpoint from its configuration entry.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            name: config.name.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            routes: ServiceRoutes {
                info: config.info_path.clone(),
                health: config.health_path.clone(),
                resource: format!("/{}", config.resource),
            },
        }
    }

    /// Absolute URL for a route on this service.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A downstream service's self-description.
///
/// Produced fresh by the downstream on every call; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Human-readable service name (e.g., "User Service").
    pub service: String,
    /// Pod or host identity of the responding instance.
    pub pod: String,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
}

/// The outcome of one successful downstream HTTP exchange.
///
/// "Successful" means an HTTP response with a parsable JSON body was
/// received; the status code may still be a downstream-reported error.
#[derive(Debug, Clone)]
pub struct ProxyResult {
    /// Exact downstream status code.
    pub status: StatusCode,
    /// Parsed JSON body, verbatim.
    pub body: Value,
}

/// Errors that make a downstream service effectively unreachable.
///
/// All variants are recovered at the dispatcher/aggregator boundary and
/// translated into a uniform gateway-side response; none propagate raw
/// to callers.
#[derive(Debug, Error)]
pub enum DownstreamError {
    /// Network-level failure: connection refused, timeout, DNS.
    #[error("service '{service}' request failed: {reason}")]
    Request { service: String, reason: String },

    /// The response body was not valid JSON.
    #[error("service '{service}' returned an unparsable body: {reason}")]
    InvalidBody { service: String, reason: String },

    /// The service answered, but not with the status the operation needs.
    #[error("service '{service}' returned unexpected status {status}")]
    UnexpectedStatus { service: String, status: StatusCode },
}

impl DownstreamError {
    /// Name of the service the failure originated from.
    pub fn service(&self) -> &str {
        match self {
            Self::Request { service, .. }
            | Self::InvalidBody { service, .. }
            | Self::UnexpectedStatus { service, .. } => service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_service() -> ServiceConfig {
        ServiceConfig {
            name: "user-service".to_string(),
            base_url: "http://127.0.0.1:3001/".to_string(),
            resource: "users".to_string(),
            info_path: "/info".to_string(),
            health_path: "/health".to_string(),
        }
    }

    #[test]
    fn test_endpoint_from_config_strips_trailing_slash() {
        let endpoint = ServiceEndpoint::from_config(&user_service());
        assert_eq!(endpoint.base_url, "http://127.0.0.1:3001");
        assert_eq!(endpoint.routes.resource, "/users");
        assert_eq!(endpoint.url_for("/info"), "http://127.0.0.1:3001/info");
    }

    #[test]
    fn test_service_info_round_trip() {
        let info: ServiceInfo = serde_json::from_value(serde_json::json!({
            "service": "User Service",
            "pod": "u1",
            "timestamp": "2025-01-01T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(info.service, "User Service");
        assert_eq!(info.pod, "u1");
    }

    #[test]
    fn test_error_display_names_service() {
        let err = DownstreamError::Request {
            service: "project-service".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.service(), "project-service");
        assert!(err.to_string().contains("project-service"));
        assert!(err.to_string().contains("connection refused"));
    }
}
