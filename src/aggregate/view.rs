//! The aggregated flow-view document.

use serde::{Deserialize, Serialize};

use crate::downstream::ServiceInfo;

/// Unified view of the gateway and every downstream service.
///
/// `downstream` is ordered by configuration (user-service first in the
/// stock topology); callers may depend on positional meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowView {
    /// The gateway's own self-description.
    pub gateway: ServiceInfo,
    /// One entry per configured service, in configured order.
    pub downstream: Vec<ServiceInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let view = FlowView {
            gateway: ServiceInfo {
                service: "API Gateway".to_string(),
                pod: "gw-1".to_string(),
                timestamp: "2025-01-01T00:00:00.000Z".to_string(),
            },
            downstream: vec![ServiceInfo {
                service: "User Service".to_string(),
                pod: "u1".to_string(),
                timestamp: "2025-01-01T00:00:00.000Z".to_string(),
            }],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["gateway"]["service"], "API Gateway");
        assert_eq!(json["downstream"][0]["pod"], "u1");
        assert_eq!(json["downstream"].as_array().unwrap().len(), 1);
    }
}
