use std::sync::Arc;

use folio_core::content::{ContentAction, Section};
use folio_core::types::DbId;
use folio_events::{ContentEvent, EventBus};

use crate::config::ServerConfig;
use crate::storage::ImageStore;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Content-change events, forwarded to WebSocket clients.
    pub event_bus: Arc<EventBus>,
    /// Backing store for uploaded images.
    pub image_store: Arc<dyn ImageStore>,
}

impl AppState {
    /// Log a content write and publish it on the event bus.
    pub fn content_changed(
        &self,
        section: Section,
        action: ContentAction,
        entity_id: Option<DbId>,
        actor_user_id: DbId,
    ) {
        tracing::info!(
            table = section.table(),
            ?action,
            ?entity_id,
            user_id = actor_user_id,
            "Content changed",
        );
        let mut event = ContentEvent::new(section, action).with_actor(actor_user_id);
        if let Some(id) = entity_id {
            event = event.with_entity(id);
        }
        self.event_bus.publish(event);
    }
}
