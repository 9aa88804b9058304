use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use folio_core::types::Timestamp;
use tokio::sync::{mpsc, RwLock};

/// Outbound half of a client's message queue.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// A connected site visitor or admin tab. Clients are anonymous listeners.
struct Listener {
    sender: WsSender,
    connected_at: Timestamp,
}

/// Registry of open WebSocket clients, keyed by connection id.
///
/// Shared as `Arc<WsManager>`; every content event is fanned out to all
/// listeners through [`WsManager::broadcast`].
#[derive(Default)]
pub struct WsManager {
    listeners: RwLock<HashMap<String, Listener>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return the queue its socket task drains.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (sender, rx) = mpsc::unbounded_channel();
        let listener = Listener {
            sender,
            connected_at: chrono::Utc::now(),
        };
        self.listeners.write().await.insert(conn_id, listener);
        rx
    }

    pub async fn remove(&self, conn_id: &str) {
        let removed = self.listeners.write().await.remove(conn_id);
        if let Some(listener) = removed {
            let secs = (chrono::Utc::now() - listener.connected_at).num_seconds();
            tracing::debug!(conn_id, secs, "Listener removed");
        }
    }

    /// Queue `message` for every listener. Closed queues are skipped here
    /// and dropped by [`WsManager::prune_closed`].
    pub async fn broadcast(&self, message: Message) {
        for listener in self.listeners.read().await.values() {
            let _ = listener.sender.send(message.clone());
        }
    }

    pub async fn connection_count(&self) -> usize {
        self.listeners.read().await.len()
    }

    /// Drop listeners whose socket task has already gone away.
    ///
    /// Returns how many were removed.
    pub async fn prune_closed(&self) -> usize {
        let mut listeners = self.listeners.write().await;
        let before = listeners.len();
        listeners.retain(|_, l| !l.sender.is_closed());
        before - listeners.len()
    }

    /// Ask every listener to close, then forget them all.
    pub async fn shutdown_all(&self) {
        let mut listeners = self.listeners.write().await;
        for listener in listeners.values() {
            let _ = listener.sender.send(Message::Close(None));
        }
        let count = listeners.len();
        listeners.clear();
        tracing::info!(count, "Closed all WebSocket listeners");
    }

    pub async fn ping_all(&self) {
        for listener in self.listeners.read().await.values() {
            let _ = listener.sender.send(Message::Ping(Bytes::new()));
        }
    }
}
