#![forbid(unsafe_code)]
//! rxlite-core: the push-pipeline primitives.
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no threads, no I/O).
//! - An `Observable` is nothing but a stored subscribe procedure; building
//!   one (or wrapping one in an operator) must do zero work.
//! - All per-subscription state lives in the `Observer` handed to a single
//!   `subscribe` call. Observables themselves stay shareable and reusable.

pub mod error;
pub mod observable;
pub mod observer;
pub mod prelude;
pub mod subscription;

pub use error::{Result, StreamError};
pub use observable::{Emitter, Observable};
pub use observer::{DeliveryState, Observer};
pub use subscription::Subscription;
