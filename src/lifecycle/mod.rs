//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C / explicit trigger
//!     → shutdown.rs (broadcast to all subscribers)
//!     → HTTP server drains in-flight requests
//!     → health monitor exits its loop
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
