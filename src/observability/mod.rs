//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / dispatcher / health monitor
//!     → metrics.rs (counters, histograms, gauges)
//!     → Prometheus exporter (optional, own listener)
//!
//! main
//!     → logging.rs (tracing subscriber, EnvFilter)
//! ```

pub mod logging;
pub mod metrics;
