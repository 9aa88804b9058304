use std::sync::Arc;

use axum::extract::ws::Message;
use folio_events::ContentEvent;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use crate::ws::manager::WsManager;

/// Spawn a task that pushes every [`ContentEvent`] to all WebSocket clients
/// as a JSON text frame.
///
/// Exits when the event bus is dropped. A lagging receiver skips the missed
/// events; clients re-fetch on the next one anyway.
pub fn start_event_forwarder(
    ws_manager: Arc<WsManager>,
    mut events: broadcast::Receiver<ContentEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => ws_manager.broadcast(Message::Text(json.into())).await,
                    Err(e) => tracing::error!(error = %e, "Failed to serialize content event"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event forwarder lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
        tracing::debug!("Event forwarder stopped");
    })
}
