//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! interval tick
//!     → monitor.rs (GET <service>/health per service, with timeout)
//!     → log outcome + gateway_service_health gauge
//! ```
//!
//! # Design Decisions
//! - Probes never evict services or change routing; failure handling
//!   stays per-request at the dispatcher/aggregator boundary

pub mod monitor;

pub use monitor::HealthMonitor;
