//! Downstream service access subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceConfig (startup)
//!     → ServiceEndpoint (name, base URL, routes; immutable)
//!     → client.rs (one outbound HTTP call per invocation)
//!     → ProxyResult (exact status + parsed JSON body)
//!       or DownstreamError (transport / parse failure)
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client; timeouts explicit from config
//! - The client never judges HTTP status codes; callers decide what a
//!   non-2xx means for their operation
//! - A body that fails JSON parsing is an unreachable-class failure,
//!   never a silently truncated result

pub mod client;
pub mod types;

pub use client::DownstreamClient;
pub use types::{DownstreamError, ProxyResult, ServiceEndpoint, ServiceInfo};
