use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

const PING_EVERY: Duration = Duration::from_secs(30);

/// Spawn the keep-alive task: prune dead listeners, then ping the rest.
///
/// Runs until the returned handle is aborted at shutdown.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PING_EVERY);
        loop {
            ticker.tick().await;
            let pruned = ws_manager.prune_closed().await;
            let listeners = ws_manager.connection_count().await;
            if pruned > 0 {
                tracing::debug!(pruned, listeners, "Pruned closed WebSocket listeners");
            }
            if listeners > 0 {
                ws_manager.ping_all().await;
            }
        }
    })
}
