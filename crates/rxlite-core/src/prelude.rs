//! Convenient re-exports for downstream crates.

pub use crate::error::{Result, StreamError};
pub use crate::observable::{Emitter, Observable};
pub use crate::observer::{DeliveryState, Observer};
pub use crate::subscription::Subscription;
