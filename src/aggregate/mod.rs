//! Aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/flow
//!     → aggregator.rs (concurrent fetch_info fan-out)
//!     → join all result slots, configured order preserved
//!     → FlowView { gateway, downstream[] }
//!       or AggregationFailed (any slot failed)
//! ```
//!
//! # Design Decisions
//! - All-or-nothing: no partial views, no placeholders
//! - Wait-all join; latency bounded by the slowest downstream
//! - Downstream order is the configured order, never completion order

pub mod aggregator;
pub mod view;

pub use aggregator::{AggregationFailed, Aggregator};
pub use view::FlowView;
