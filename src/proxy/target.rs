//! Per-resource proxy targets.

use std::collections::HashMap;

use crate::config::ServiceConfig;
use crate::downstream::ServiceEndpoint;

/// Routing record for one proxied resource.
///
/// Built from configuration at startup; carries the precomputed
/// operation-specific error messages so failure translation needs no
/// string assembly per request.
#[derive(Debug, Clone)]
pub struct ProxyTarget {
    /// The owning downstream service.
    pub endpoint: ServiceEndpoint,
    /// Resource collection name (e.g., "users").
    pub resource: String,
    /// Message for failed GETs, e.g. "Failed to fetch users".
    pub fetch_error: String,
    /// Message for failed POSTs, e.g. "Failed to create user".
    pub create_error: String,
}

impl ProxyTarget {
    /// Build a target from a service definition.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            endpoint: ServiceEndpoint::from_config(config),
            resource: config.resource.clone(),
            fetch_error: format!("Failed to fetch {}", config.resource),
            create_error: format!("Failed to create {}", singular(&config.resource)),
        }
    }

    /// Build the resource → target lookup table for a topology.
    pub fn table(services: &[ServiceConfig]) -> HashMap<String, ProxyTarget> {
        services
            .iter()
            .map(|service| (service.resource.clone(), ProxyTarget::from_config(service)))
            .collect()
    }
}

// "users" → "user"; resources are conventionally plural collection names.
fn singular(resource: &str) -> &str {
    resource.strip_suffix('s').unwrap_or(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[test]
    fn test_error_messages_derive_from_resource() {
        let services = ServiceConfig::default_topology();
        let users = ProxyTarget::from_config(&services[0]);
        assert_eq!(users.fetch_error, "Failed to fetch users");
        assert_eq!(users.create_error, "Failed to create user");

        let projects = ProxyTarget::from_config(&services[1]);
        assert_eq!(projects.fetch_error, "Failed to fetch projects");
        assert_eq!(projects.create_error, "Failed to create project");
    }

    #[test]
    fn test_table_keys_by_resource() {
        let table = ProxyTarget::table(&ServiceConfig::default_topology());
        assert_eq!(table.len(), 2);
        assert_eq!(table["users"].endpoint.name, "user-service");
        assert_eq!(table["projects"].endpoint.name, "project-service");
        assert!(!table.contains_key("orders"));
    }
}
