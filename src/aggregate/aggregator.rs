//! Concurrent fan-out over all configured downstream services.

use futures_util::future::join_all;
use thiserror::Error;

use crate::aggregate::view::FlowView;
use crate::downstream::{DownstreamClient, DownstreamError, ServiceEndpoint};
use crate::identity::GatewayIdentity;

/// The whole aggregation failed because at least one downstream call did.
#[derive(Debug, Error)]
#[error("downstream aggregation failed: {source}")]
pub struct AggregationFailed {
    #[from]
    source: DownstreamError,
}

impl AggregationFailed {
    /// The underlying downstream failure.
    pub fn cause(&self) -> &DownstreamError {
        &self.source
    }
}

/// Fans out info calls to every configured service and merges the
/// responses into one [`FlowView`].
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: DownstreamClient,
    identity: GatewayIdentity,
    endpoints: Vec<ServiceEndpoint>,
}

impl Aggregator {
    /// Create an aggregator over a fixed, ordered set of endpoints.
    pub fn new(
        client: DownstreamClient,
        identity: GatewayIdentity,
        endpoints: Vec<ServiceEndpoint>,
    ) -> Self {
        Self {
            client,
            identity,
            endpoints,
        }
    }

    /// The configured endpoints, in aggregation order.
    pub fn endpoints(&self) -> &[ServiceEndpoint] {
        &self.endpoints
    }

    /// Fetch every service's self-description concurrently and build the
    /// unified view.
    ///
    /// All calls are issued before any is awaited and joined as a group,
    /// so latency is bounded by the slowest downstream rather than the
    /// sum. Result slots keep configured order regardless of completion
    /// order. If any call fails the whole aggregation fails; no partial
    /// view is ever produced.
    pub async fn aggregate(&self) -> Result<FlowView, AggregationFailed> {
        let calls = self
            .endpoints
            .iter()
            .map(|endpoint| self.client.fetch_info(endpoint));
        let results = join_all(calls).await;

        let mut downstream = Vec::with_capacity(results.len());
        for result in results {
            downstream.push(result?);
        }

        Ok(FlowView {
            gateway: self.identity.describe(),
            downstream,
        })
    }
}
