//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, before anything logs
//! - Respect RUST_LOG, with a sensible default filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Request-scoped fields come from tower-http's TraceLayer

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber.
///
/// `default_filter` applies when RUST_LOG is unset.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
