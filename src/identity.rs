//! Gateway process identity.
//!
//! Resolved once at startup and injected wherever a self-description is
//! produced, instead of reading the environment ad hoc.

use chrono::{SecondsFormat, Utc};

use crate::config::schema::IdentityConfig;
use crate::downstream::ServiceInfo;

/// Immutable process identity.
#[derive(Debug, Clone)]
pub struct GatewayIdentity {
    service: String,
    pod: String,
}

impl GatewayIdentity {
    /// Resolve the identity: explicit config value, else HOSTNAME, else
    /// a local fallback.
    pub fn from_config(config: &IdentityConfig) -> Self {
        let pod = config
            .pod
            .clone()
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "gateway-local".to_string());
        Self {
            service: config.service_name.clone(),
            pod,
        }
    }

    /// The reported service name.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The resolved pod name.
    pub fn pod(&self) -> &str {
        &self.pod
    }

    /// Produce a fresh self-description with the current timestamp.
    pub fn describe(&self) -> ServiceInfo {
        ServiceInfo {
            service: self.service.clone(),
            pod: self.pod.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
