//! Single-call HTTP client for downstream services.
//!
//! # Responsibilities
//! - Issue exactly one outbound request per invocation
//! - Return the downstream's exact status code and parsed JSON body
//! - Signal transport and parse failures as typed errors
//!
//! # Design Decisions
//! - No retries; the caller gets one attempt's outcome
//! - Explicit connect and total timeouts from configuration
//! - A result is never partially read: complete parsed body or failure

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use crate::config::TimeoutConfig;
use crate::downstream::types::{DownstreamError, ProxyResult, ServiceEndpoint, ServiceInfo};

/// Shared client for all downstream calls.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
}

impl DownstreamClient {
    /// Build a client with the configured timeouts.
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.downstream_secs))
            .build()?;
        Ok(Self { http })
    }

    /// Issue one request to `endpoint.base_url + path`.
    ///
    /// The body, when given, is forwarded unmodified. Any HTTP response
    /// with a parsable JSON body is returned verbatim, whatever its
    /// status code.
    pub async fn call(
        &self,
        endpoint: &ServiceEndpoint,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<ProxyResult, DownstreamError> {
        let url = endpoint.url_for(path);

        let mut request = self.http.request(method, url);
        if let Some(bytes) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DownstreamError::Request {
                service: endpoint.name.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .json()
            .await
            .map_err(|e| DownstreamError::InvalidBody {
                service: endpoint.name.clone(),
                reason: e.to_string(),
            })?;

        Ok(ProxyResult { status, body })
    }

    /// Fetch and deserialize a service's self-description.
    ///
    /// Unlike [`call`](Self::call), a non-2xx status is a failure here:
    /// an info document must come from a healthy response.
    pub async fn fetch_info(
        &self,
        endpoint: &ServiceEndpoint,
    ) -> Result<ServiceInfo, DownstreamError> {
        let result = self
            .call(endpoint, Method::GET, &endpoint.routes.info, None)
            .await?;

        if !result.status.is_success() {
            return Err(DownstreamError::UnexpectedStatus {
                service: endpoint.name.clone(),
                status: result.status,
            });
        }

        serde_json::from_value(result.body).map_err(|e| DownstreamError::InvalidBody {
            service: endpoint.name.clone(),
            reason: e.to_string(),
        })
    }
}
