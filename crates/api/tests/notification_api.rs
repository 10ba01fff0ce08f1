//! HTTP-level integration tests for notification fan-out and read state.
//!
//! Exercises the triggering actions end-to-end: follows, likes, and
//! comments create notifications for the right recipient (and only on
//! first creation), self-actions are suppressed, and read-state
//! transitions behave per the unread -> read state machine.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, register_user, send_auth, send_json_auth};
use sqlx::PgPool;

/// Create a preset owned by the token's user, returning its id.
async fn create_preset(app: axum::Router, token: &str, title: &str) -> i64 {
    let body = serde_json::json!({
        "title": title,
        "parameters": { "feedback": 0.5, "mix": 0.7 },
    });
    let response = send_json_auth(app, "POST", "/api/presets", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Fetch the unread count for the token's user.
async fn unread_count(app: axum::Router, token: &str) -> i64 {
    let response = get_auth(app, "/api/notifications/unread-count", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["count"].as_i64().unwrap()
}

/// The spec scenario: alice follows bob -> bob has one unread follow
/// notification from alice; marking it read zeroes the count.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_follow_notification_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (alice_id, alice_token) = register_user(app.clone(), "alice").await;
    let (bob_id, bob_token) = register_user(app.clone(), "bob").await;

    send_auth(
        app.clone(),
        "POST",
        &format!("/api/users/{bob_id}/follow"),
        &alice_token,
    )
    .await;

    let response = get_auth(app.clone(), "/api/notifications", &bob_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "follow");
    assert_eq!(items[0]["actor_id"], alice_id);
    assert_eq!(items[0]["actor_username"], "alice");
    assert_eq!(items[0]["is_read"], false);
    assert!(items[0]["preset_id"].is_null());

    assert_eq!(unread_count(app.clone(), &bob_token).await, 1);

    // Mark it read; the count drops to zero.
    let notification_id = items[0]["id"].as_i64().unwrap();
    let response = send_auth(
        app.clone(),
        "POST",
        &format!("/api/notifications/{notification_id}/read"),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(unread_count(app.clone(), &bob_token).await, 0);
}

/// A repeated follow does not create a second notification.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_follow_notifies_once(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice_id, alice_token) = register_user(app.clone(), "alice").await;
    let (bob_id, bob_token) = register_user(app.clone(), "bob").await;

    for _ in 0..2 {
        send_auth(
            app.clone(),
            "POST",
            &format!("/api/users/{bob_id}/follow"),
            &alice_token,
        )
        .await;
    }

    assert_eq!(unread_count(app.clone(), &bob_token).await, 1);
}

/// Liking a preset notifies the owner once; liking one's own preset
/// records nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_notification_and_self_suppression(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice_id, alice_token) = register_user(app.clone(), "alice").await;
    let (_bob_id, bob_token) = register_user(app.clone(), "bob").await;

    let preset_id = create_preset(app.clone(), &bob_token, "Dub echo").await;

    // Bob likes his own preset: no notification.
    send_auth(
        app.clone(),
        "POST",
        &format!("/api/presets/{preset_id}/like"),
        &bob_token,
    )
    .await;
    assert_eq!(unread_count(app.clone(), &bob_token).await, 0);

    // Alice likes bob's preset twice: exactly one notification.
    for _ in 0..2 {
        send_auth(
            app.clone(),
            "POST",
            &format!("/api/presets/{preset_id}/like"),
            &alice_token,
        )
        .await;
    }
    assert_eq!(unread_count(app.clone(), &bob_token).await, 1);

    let response = get_auth(app.clone(), "/api/notifications", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["kind"], "like");
    assert_eq!(json["data"][0]["preset_id"], preset_id);
    assert!(json["data"][0]["comment_id"].is_null());
}

/// A comment notifies the preset owner with both references set; the
/// owner commenting on their own preset records nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_notification(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (alice_id, alice_token) = register_user(app.clone(), "alice").await;
    let (_bob_id, bob_token) = register_user(app.clone(), "bob").await;

    let preset_id = create_preset(app.clone(), &bob_token, "Tape stop").await;

    // Owner's own comment: suppressed.
    send_json_auth(
        app.clone(),
        "POST",
        &format!("/api/presets/{preset_id}/comments"),
        &bob_token,
        serde_json::json!({ "body": "notes to self" }),
    )
    .await;
    assert_eq!(unread_count(app.clone(), &bob_token).await, 0);

    // Alice's comment: one notification with preset and comment refs.
    let response = send_json_auth(
        app.clone(),
        "POST",
        &format!("/api/presets/{preset_id}/comments"),
        &alice_token,
        serde_json::json!({ "body": "lovely wobble" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get_auth(app.clone(), "/api/notifications", &bob_token).await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "comment");
    assert_eq!(items[0]["actor_id"], alice_id);
    assert_eq!(items[0]["preset_id"], preset_id);
    assert_eq!(items[0]["comment_id"], comment_id);
}

/// Marking another user's notification is rejected and leaves its read
/// state unchanged.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_requires_ownership(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice_id, alice_token) = register_user(app.clone(), "alice").await;
    let (bob_id, bob_token) = register_user(app.clone(), "bob").await;

    send_auth(
        app.clone(),
        "POST",
        &format!("/api/users/{bob_id}/follow"),
        &alice_token,
    )
    .await;

    let response = get_auth(app.clone(), "/api/notifications", &bob_token).await;
    let notification_id = body_json(response).await["data"][0]["id"].as_i64().unwrap();

    // Alice tries to mark bob's notification.
    let response = send_auth(
        app.clone(),
        "POST",
        &format!("/api/notifications/{notification_id}/read"),
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(unread_count(app.clone(), &bob_token).await, 1);

    // Marking a nonexistent notification is 404, not 403.
    let response = send_auth(
        app.clone(),
        "POST",
        "/api/notifications/9999/read",
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// read-all transitions everything and is idempotent.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_all_read(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice_id, alice_token) = register_user(app.clone(), "alice").await;
    let (_carol_id, carol_token) = register_user(app.clone(), "carol").await;
    let (bob_id, bob_token) = register_user(app.clone(), "bob").await;

    for token in [&alice_token, &carol_token] {
        send_auth(
            app.clone(),
            "POST",
            &format!("/api/users/{bob_id}/follow"),
            token,
        )
        .await;
    }
    assert_eq!(unread_count(app.clone(), &bob_token).await, 2);

    let response = send_auth(app.clone(), "POST", "/api/notifications/read-all", &bob_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 2);
    assert_eq!(unread_count(app.clone(), &bob_token).await, 0);

    // Second call is a no-op.
    let response = send_auth(app.clone(), "POST", "/api/notifications/read-all", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 0);
}

/// The listing respects and clamps the limit parameter.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_limit_clamped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (bob_id, bob_token) = register_user(app.clone(), "bob").await;

    for i in 0..3 {
        let (_id, token) = register_user(app.clone(), &format!("fan{i}")).await;
        send_auth(
            app.clone(),
            "POST",
            &format!("/api/users/{bob_id}/follow"),
            &token,
        )
        .await;
    }

    let response = get_auth(app.clone(), "/api/notifications?limit=2", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // A limit beyond the cap still succeeds (clamped server-side).
    let response = get_auth(app.clone(), "/api/notifications?limit=5000", &bob_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}
