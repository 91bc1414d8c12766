//! Edge Gateway Library
//!
//! A small API gateway fronting independent backing services: concurrent
//! info aggregation plus per-resource proxy dispatch.

pub mod aggregate;
pub mod config;
pub mod downstream;
pub mod health;
pub mod http;
pub mod identity;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use identity::GatewayIdentity;
pub use lifecycle::Shutdown;
