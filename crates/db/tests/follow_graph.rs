//! Repository-level tests for follow-edge consistency.

use loopedia_db::models::user::CreateUser;
use loopedia_db::repositories::{FollowRepo, RoleRepo, UserRepo};
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

/// Following twice creates exactly one edge; only the first call reports
/// a creation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_follow_is_idempotent(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    assert!(FollowRepo::create(&pool, alice, bob).await.unwrap());
    assert!(!FollowRepo::create(&pool, alice, bob).await.unwrap());

    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM follows WHERE follower_id = $1 AND followed_id = $2",
    )
    .bind(alice)
    .bind(bob)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1, "exactly one edge per ordered pair");
}

/// Unfollowing a missing edge is a no-op, not an error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unfollow_is_idempotent(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    FollowRepo::create(&pool, alice, bob).await.unwrap();
    assert!(FollowRepo::delete(&pool, alice, bob).await.unwrap());
    assert!(!FollowRepo::delete(&pool, alice, bob).await.unwrap());
    assert!(!FollowRepo::exists(&pool, alice, bob).await.unwrap());
}

/// The database check constraint backstops the service-level self-follow
/// rejection.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_follow_rejected_by_schema(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let result = FollowRepo::create(&pool, alice, alice).await;
    assert!(result.is_err(), "self-follow must violate the check constraint");
}

/// Edges are directed: alice following bob does not imply the reverse.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edges_are_directed(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    FollowRepo::create(&pool, alice, bob).await.unwrap();
    assert!(FollowRepo::exists(&pool, alice, bob).await.unwrap());
    assert!(!FollowRepo::exists(&pool, bob, alice).await.unwrap());
}

/// Follower listings annotate each row with whether the viewer follows
/// that user, derived per query.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_follower_listing_annotation(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let carol = seed_user(&pool, "carol").await;

    // Both alice and carol follow bob; alice also follows carol.
    FollowRepo::create(&pool, alice, bob).await.unwrap();
    FollowRepo::create(&pool, carol, bob).await.unwrap();
    FollowRepo::create(&pool, alice, carol).await.unwrap();

    // Viewed by alice: carol is annotated followed, alice herself is not.
    let followers = FollowRepo::list_followers(&pool, bob, Some(alice)).await.unwrap();
    assert_eq!(followers.len(), 2);
    let carol_row = followers.iter().find(|f| f.id == carol).unwrap();
    assert!(carol_row.is_following);
    let alice_row = followers.iter().find(|f| f.id == alice).unwrap();
    assert!(!alice_row.is_following, "viewer does not follow themselves");

    // Anonymous viewer: every annotation is false.
    let anon = FollowRepo::list_followers(&pool, bob, None).await.unwrap();
    assert!(anon.iter().all(|f| !f.is_following));
}

/// Unfollow-then-refollow cycles never accumulate duplicate rows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refollow_cycle_no_duplicates(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    for _ in 0..3 {
        FollowRepo::create(&pool, alice, bob).await.unwrap();
        FollowRepo::delete(&pool, alice, bob).await.unwrap();
    }
    FollowRepo::create(&pool, alice, bob).await.unwrap();

    let followers = FollowRepo::list_followers(&pool, bob, None).await.unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, alice);
}
