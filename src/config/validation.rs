//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check service definitions are usable (names, resources, URLs)
//! - Validate value ranges (timeouts and intervals > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no downstream services configured")]
    NoServices,

    #[error("service '{0}' is defined more than once")]
    DuplicateServiceName(String),

    #[error("resource '{0}' is owned by more than one service")]
    DuplicateResource(String),

    #[error("service '{service}' has an invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl {
        service: String,
        base_url: String,
        reason: String,
    },

    #[error("service '{service}' route '{path}' must start with '/'")]
    InvalidRoute { service: String, path: String },

    #[error("service '{0}' has an empty resource name")]
    EmptyResource(String),

    #[error("timeout '{0}' must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("health check interval must be greater than zero")]
    ZeroInterval,
}

/// Validate a configuration, collecting every semantic error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.services.is_empty() {
        errors.push(ValidationError::NoServices);
    }

    let mut names = HashSet::new();
    let mut resources = HashSet::new();
    for service in &config.services {
        if !names.insert(service.name.as_str()) {
            errors.push(ValidationError::DuplicateServiceName(service.name.clone()));
        }
        if service.resource.is_empty() {
            errors.push(ValidationError::EmptyResource(service.name.clone()));
        } else if !resources.insert(service.resource.as_str()) {
            errors.push(ValidationError::DuplicateResource(service.resource.clone()));
        }

        match Url::parse(&service.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
                service: service.name.clone(),
                base_url: service.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError::InvalidBaseUrl {
                service: service.name.clone(),
                base_url: service.base_url.clone(),
                reason: e.to_string(),
            }),
        }

        for path in [&service.info_path, &service.health_path] {
            if !path.starts_with('/') {
                errors.push(ValidationError::InvalidRoute {
                    service: service.name.clone(),
                    path: path.clone(),
                });
            }
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }
    if config.timeouts.downstream_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("downstream_secs"));
    }
    if config.health_check.enabled && config.health_check.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::GatewayConfig;

    #[test]
    fn test_default_topology_is_valid() {
        let config = GatewayConfig::with_default_services();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_services_rejected() {
        let config = GatewayConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::NoServices));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut config = GatewayConfig::with_default_services();
        config.services[1].name = config.services[0].name.clone();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateServiceName(_))));
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut config = GatewayConfig::with_default_services();
        config.services[0].base_url = "not a url".to_string();
        config.services[1].base_url = "ftp://project-service:3002".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| matches!(e, ValidationError::InvalidBaseUrl { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_zero_timeout_collected_with_other_errors() {
        let mut config = GatewayConfig::with_default_services();
        config.timeouts.downstream_secs = 0;
        config.services[0].info_path = "info".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroTimeout("downstream_secs")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidRoute { .. })));
    }
}
