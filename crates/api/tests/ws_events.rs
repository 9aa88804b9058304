//! Tests for the WebSocket connection manager and content-event delivery.

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::ws::Message;
use folio_api::ws::{start_event_forwarder, WsManager};
use folio_core::content::{ContentAction, Section};
use folio_events::{ContentEvent, EventBus};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// WsManager
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_add_and_remove_connections() {
    let manager = WsManager::new();
    let _rx1 = manager.add("a".to_string()).await;
    let _rx2 = manager.add("b".to_string()).await;
    assert_eq!(manager.connection_count().await, 2);

    manager.remove("a").await;
    manager.remove("missing").await;
    assert_eq!(manager.connection_count().await, 1);
}

#[tokio::test]
async fn test_broadcast_reaches_every_connection() {
    let manager = WsManager::new();
    let mut rx1 = manager.add("a".to_string()).await;
    let mut rx2 = manager.add("b".to_string()).await;

    manager.broadcast(Message::Text("hello".into())).await;

    assert_matches!(rx1.recv().await, Some(Message::Text(t)) if t.as_str() == "hello");
    assert_matches!(rx2.recv().await, Some(Message::Text(t)) if t.as_str() == "hello");
}

#[tokio::test]
async fn test_shutdown_all_sends_close() {
    let manager = WsManager::new();
    let mut rx = manager.add("a".to_string()).await;

    manager.shutdown_all().await;

    assert_matches!(rx.recv().await, Some(Message::Close(None)));
    assert_eq!(manager.connection_count().await, 0);
}

/// Listeners whose receiver was dropped are removed on the next prune.
#[tokio::test]
async fn test_prune_closed() {
    let manager = WsManager::new();
    let _live = manager.add("live".to_string()).await;
    let gone = manager.add("gone".to_string()).await;
    drop(gone);

    assert_eq!(manager.prune_closed().await, 1);
    assert_eq!(manager.connection_count().await, 1);
    assert_eq!(manager.prune_closed().await, 0);
}

#[tokio::test]
async fn test_ping_all() {
    let manager = WsManager::new();
    let mut rx = manager.add("a".to_string()).await;

    manager.ping_all().await;

    assert_matches!(rx.recv().await, Some(Message::Ping(_)));
}

// ---------------------------------------------------------------------------
// Forwarder
// ---------------------------------------------------------------------------

/// Events published on the bus arrive at clients as JSON text frames.
#[tokio::test]
async fn test_forwarder_pushes_events_as_json() {
    let manager = Arc::new(WsManager::new());
    let bus = EventBus::default();
    let mut rx = manager.add("a".to_string()).await;
    let handle = start_event_forwarder(Arc::clone(&manager), bus.subscribe());

    bus.publish(
        ContentEvent::new(Section::Projects, ContentAction::Created)
            .with_entity(7)
            .with_actor(1),
    );

    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("event should arrive")
        .expect("channel open");
    let Message::Text(text) = msg else {
        panic!("expected a text frame");
    };
    let payload: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
    assert_eq!(payload["table"], "projects");
    assert_eq!(payload["action"], "created");
    assert_eq!(payload["entity_id"], 7);
    assert!(payload.get("actor_user_id").is_none());
    assert!(payload["timestamp"].is_string());

    // Dropping the bus closes the channel and stops the forwarder.
    drop(bus);
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("forwarder should stop")
        .unwrap();
}

// ---------------------------------------------------------------------------
// Writes publish events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_writes_publish_content_events(pool: PgPool) {
    let admin = common::create_admin(&pool).await;
    let token = common::token_for(admin.id, &admin.email, &admin.role);
    let config = common::test_config(&std::env::temp_dir().join("folio-test-uploads"));
    let (app, bus) = common::build_test_app_with(pool, config);
    let mut events = bus.subscribe();

    common::put_json_auth(app.clone(), "/api/hero", json!({ "name": "Ada" }), &token).await;
    let event = events.try_recv().expect("hero event");
    assert_eq!(event.section, Section::Hero);
    assert_eq!(event.action, ContentAction::Updated);
    assert_eq!(event.entity_id, None);
    assert_eq!(event.actor_user_id, Some(admin.id));

    let response = common::post_json_auth(
        app.clone(),
        "/api/soft-skills",
        json!({ "title": "Teamwork" }),
        &token,
    )
    .await;
    let id = common::body_json(response).await["id"].as_i64().unwrap();
    let event = events.try_recv().expect("create event");
    assert_eq!(event.section, Section::SoftSkills);
    assert_eq!(event.action, ContentAction::Created);
    assert_eq!(event.entity_id, Some(id));

    common::delete_auth(app, &format!("/api/soft-skills/{id}"), &token).await;
    let event = events.try_recv().expect("delete event");
    assert_eq!(event.action, ContentAction::Deleted);
}

/// Failed writes publish nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rejected_write_publishes_nothing(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let config = common::test_config(&std::env::temp_dir().join("folio-test-uploads"));
    let (app, bus) = common::build_test_app_with(pool, config);
    let mut events = bus.subscribe();

    common::put_json_auth(app, "/api/stats", json!({ "professionalism_percent": 150 }), &token)
        .await;
    assert!(events.try_recv().is_err());
}
