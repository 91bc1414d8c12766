//! Forwarding of one inbound request to exactly one downstream service.

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use crate::downstream::DownstreamClient;
use crate::observability::metrics;
use crate::proxy::target::ProxyTarget;

/// Forwards resource requests and translates downstream failures into a
/// uniform gateway-side response.
#[derive(Debug, Clone)]
pub struct ProxyDispatcher {
    client: DownstreamClient,
}

impl ProxyDispatcher {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }

    /// Forward a request to the target's resource route and produce the
    /// status and body to write to the inbound response.
    ///
    /// The downstream's status code and body are relayed unchanged,
    /// including downstream-reported errors. Only an unreachable-class
    /// failure maps to a fixed 500 with the operation-specific message.
    pub async fn dispatch(
        &self,
        target: &ProxyTarget,
        method: Method,
        body: Option<Bytes>,
    ) -> (StatusCode, Value) {
        let message = if method == Method::POST {
            &target.create_error
        } else {
            &target.fetch_error
        };

        match self
            .client
            .call(&target.endpoint, method, &target.endpoint.routes.resource, body)
            .await
        {
            Ok(result) => {
                metrics::record_downstream_call(&target.endpoint.name, "ok");
                (result.status, result.body)
            }
            Err(e) => {
                tracing::error!(
                    service = %target.endpoint.name,
                    resource = %target.resource,
                    error = %e,
                    "Downstream call failed"
                );
                metrics::record_downstream_call(&target.endpoint.name, "error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
        }
    }
}
