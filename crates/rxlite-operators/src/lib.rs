#![forbid(unsafe_code)]
//! rxlite-operators: intermediate operators (map/filter) over the core.
//!
//! Design intent:
//! - Operators are thin wrappers: each returns a brand-new `Observable`
//!   whose subscribe procedure subscribes to the source with a derived
//!   observer. No buffering, no scheduling, no shared state between
//!   subscriptions.
//! - An operator function returning `Err` terminates that subscription
//!   through the error channel; it never raises out of the pipeline.

pub mod filter;
pub mod map;
pub mod traits;

pub use traits::Pipeline;
