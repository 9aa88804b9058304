//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`ContentEvent`]s. It is
//! shared via `Arc<EventBus>` across the application; the WebSocket
//! forwarder is its main subscriber.

use chrono::{DateTime, Utc};
use folio_core::content::{ContentAction, Section};
use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ContentEvent
// ---------------------------------------------------------------------------

/// A write to one content section.
///
/// Serialized as `{"table", "action", "entity_id", "timestamp"}`; this is
/// the exact message pushed to WebSocket clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEvent {
    /// Section that changed, serialized as its table name.
    #[serde(rename = "table")]
    pub section: Section,

    pub action: ContentAction,

    /// Row id for list sections. `None` for singletons and reorders.
    pub entity_id: Option<DbId>,

    /// Admin who made the change. Kept server-side only.
    #[serde(skip_serializing, default)]
    pub actor_user_id: Option<DbId>,

    pub timestamp: DateTime<Utc>,
}

impl ContentEvent {
    pub fn new(section: Section, action: ContentAction) -> Self {
        Self {
            section,
            action,
            entity_id: None,
            actor_user_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the affected row id.
    pub fn with_entity(mut self, id: DbId) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Attach the acting user.
    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use folio_core::content::{ContentAction, Section};
/// use folio_events::bus::{ContentEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ContentEvent::new(Section::Hero, ContentAction::Updated));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<ContentEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: ContentEvent) {
        tracing::trace!(
            table = event.section.table(),
            action = ?event.action,
            entity_id = ?event.entity_id,
            "Publishing content event",
        );
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.sender.subscribe()
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
