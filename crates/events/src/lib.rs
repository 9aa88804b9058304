//! Content-change events.
//!
//! - [`EventBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ContentEvent`] -- what changed, in which section, and when.

pub mod bus;

pub use bus::{ContentEvent, EventBus};
