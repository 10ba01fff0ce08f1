//! Notification fan-out.
//!
//! Each `notify_*` helper is called synchronously from the handler of the
//! triggering action (like, comment, follow, contact reply). Notifications
//! are auxiliary records: a failed insert is logged and swallowed so the
//! triggering action itself never fails because of it. Self-notification
//! (acting on one's own content) is suppressed here, in one place.

use loopedia_core::notification::{NotificationKind, NotificationRefs};
use loopedia_core::types::DbId;
use loopedia_db::models::notification::NewNotification;
use loopedia_db::repositories::NotificationRepo;
use loopedia_db::DbPool;

/// A user followed another user. Recipient: the followed user.
pub async fn notify_follow(pool: &DbPool, follower_id: DbId, followed_id: DbId) {
    deliver(
        pool,
        NewNotification {
            recipient_id: followed_id,
            actor_id: Some(follower_id),
            kind: NotificationKind::Follow,
            refs: NotificationRefs::none(),
        },
    )
    .await;
}

/// A user liked a preset. Recipient: the preset owner.
///
/// Liking one's own preset records nothing.
pub async fn notify_like(pool: &DbPool, liker_id: DbId, owner_id: DbId, preset_id: DbId) {
    if liker_id == owner_id {
        return;
    }
    deliver(
        pool,
        NewNotification {
            recipient_id: owner_id,
            actor_id: Some(liker_id),
            kind: NotificationKind::Like,
            refs: NotificationRefs::preset(preset_id),
        },
    )
    .await;
}

/// A user commented on a preset. Recipient: the preset owner.
///
/// Commenting on one's own preset records nothing.
pub async fn notify_comment(
    pool: &DbPool,
    commenter_id: DbId,
    owner_id: DbId,
    preset_id: DbId,
    comment_id: DbId,
) {
    if commenter_id == owner_id {
        return;
    }
    deliver(
        pool,
        NewNotification {
            recipient_id: owner_id,
            actor_id: Some(commenter_id),
            kind: NotificationKind::Comment,
            refs: NotificationRefs::comment(preset_id, comment_id),
        },
    )
    .await;
}

/// An admin replied to a contact message. Recipient: the message author.
///
/// No actor is recorded; the reply is from the system/support side.
pub async fn notify_contact_reply(pool: &DbPool, author_id: DbId, contact_id: DbId) {
    deliver(
        pool,
        NewNotification {
            recipient_id: author_id,
            actor_id: None,
            kind: NotificationKind::ContactReply,
            refs: NotificationRefs::contact(contact_id),
        },
    )
    .await;
}

/// Insert the notification, logging and swallowing any failure.
async fn deliver(pool: &DbPool, input: NewNotification) {
    if let Err(e) = input.refs.validate_for(input.kind) {
        tracing::warn!(
            error = %e,
            kind = %input.kind,
            recipient_id = input.recipient_id,
            "Dropping notification with invalid references"
        );
        return;
    }
    if let Err(e) = NotificationRepo::create(pool, &input).await {
        tracing::warn!(
            error = %e,
            kind = %input.kind,
            recipient_id = input.recipient_id,
            "Failed to record notification"
        );
    }
}
