//! Proxy dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! GET/POST /api/<resource>
//!     → target.rs (resource → ProxyTarget lookup table)
//!     → dispatcher.rs (one downstream call)
//!     → relay exact status + body
//!       or 500 {"error": <operation-specific message>}
//! ```
//!
//! # Design Decisions
//! - Downstream-reported statuses (incl. 4xx/5xx) are relayed verbatim
//! - Only transport/parse failures become gateway-side 500s
//! - Request bodies pass through unmodified; validation belongs to the
//!   owning service

pub mod dispatcher;
pub mod target;

pub use dispatcher::ProxyDispatcher;
pub use target::ProxyTarget;
