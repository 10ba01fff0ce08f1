//! Repository-level tests for notification read-state semantics.

use loopedia_core::notification::{NotificationKind, NotificationRefs};
use loopedia_db::models::notification::NewNotification;
use loopedia_db::models::user::CreateUser;
use loopedia_db::repositories::{NotificationRepo, RoleRepo, UserRepo};
use sqlx::PgPool;

/// Insert a user with the default role, returning its id.
async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    let role_id = RoleRepo::find_id_by_name(pool, "user").await.unwrap();
    let input = CreateUser {
        username: username.to_string(),
        nickname: None,
        email: format!("{username}@test.com"),
        password_hash: "unused".to_string(),
        role_id,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

/// Insert a follow notification from `actor` to `recipient`.
async fn seed_follow_notification(pool: &PgPool, recipient: i64, actor: i64) -> i64 {
    NotificationRepo::create(
        pool,
        &NewNotification {
            recipient_id: recipient,
            actor_id: Some(actor),
            kind: NotificationKind::Follow,
            refs: NotificationRefs::none(),
        },
    )
    .await
    .unwrap()
}

/// Unread counts are derived by scan and track read transitions exactly.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_count_tracks_reads(pool: PgPool) {
    let bob = seed_user(&pool, "bob").await;
    let alice = seed_user(&pool, "alice").await;
    let carol = seed_user(&pool, "carol").await;

    assert_eq!(NotificationRepo::unread_count(&pool, bob).await.unwrap(), 0);

    let first = seed_follow_notification(&pool, bob, alice).await;
    seed_follow_notification(&pool, bob, carol).await;
    assert_eq!(NotificationRepo::unread_count(&pool, bob).await.unwrap(), 2);

    NotificationRepo::mark_read(&pool, first).await.unwrap();
    assert_eq!(NotificationRepo::unread_count(&pool, bob).await.unwrap(), 1);

    // Re-marking an already-read notification changes nothing.
    NotificationRepo::mark_read(&pool, first).await.unwrap();
    assert_eq!(NotificationRepo::unread_count(&pool, bob).await.unwrap(), 1);
}

/// mark_all_read transitions every unread row and is idempotent.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_all_read_idempotent(pool: PgPool) {
    let bob = seed_user(&pool, "bob").await;
    let alice = seed_user(&pool, "alice").await;

    for _ in 0..3 {
        seed_follow_notification(&pool, bob, alice).await;
    }

    assert_eq!(NotificationRepo::mark_all_read(&pool, bob).await.unwrap(), 3);
    assert_eq!(NotificationRepo::unread_count(&pool, bob).await.unwrap(), 0);
    assert_eq!(NotificationRepo::mark_all_read(&pool, bob).await.unwrap(), 0);
}

/// Listings are newest-first, capped by limit, and carry actor info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_order_and_actor_enrichment(pool: PgPool) {
    let bob = seed_user(&pool, "bob").await;
    let alice = seed_user(&pool, "alice").await;

    let first = seed_follow_notification(&pool, bob, alice).await;
    let second = seed_follow_notification(&pool, bob, alice).await;

    let list = NotificationRepo::list_for_recipient(&pool, bob, 50).await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, second, "newest first");
    assert_eq!(list[1].id, first);
    assert_eq!(list[0].actor_username.as_deref(), Some("alice"));
    assert!(!list[0].is_read);

    let capped = NotificationRepo::list_for_recipient(&pool, bob, 1).await.unwrap();
    assert_eq!(capped.len(), 1);
}

/// mark_all_read only touches the given recipient's rows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_all_read_scoped_to_recipient(pool: PgPool) {
    let bob = seed_user(&pool, "bob").await;
    let carol = seed_user(&pool, "carol").await;
    let alice = seed_user(&pool, "alice").await;

    seed_follow_notification(&pool, bob, alice).await;
    seed_follow_notification(&pool, carol, alice).await;

    NotificationRepo::mark_all_read(&pool, bob).await.unwrap();
    assert_eq!(NotificationRepo::unread_count(&pool, bob).await.unwrap(), 0);
    assert_eq!(NotificationRepo::unread_count(&pool, carol).await.unwrap(), 1);
}
