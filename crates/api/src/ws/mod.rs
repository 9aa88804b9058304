//! WebSocket infrastructure for live content updates.
//!
//! Provides connection management, heartbeat monitoring, the HTTP upgrade
//! handler, and the task that forwards content events to every client.

mod forwarder;
mod handler;
mod heartbeat;
pub mod manager;

pub use forwarder::start_event_forwarder;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
