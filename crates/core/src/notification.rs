//! The closed set of notification kinds and their reference rules.
//!
//! Every notification row carries a `kind` column holding one of these
//! values, plus at most one meaningful entity reference. Which reference
//! is meaningful is fixed per kind:
//!
//! | kind            | actor      | preset_id | comment_id | contact_id |
//! |-----------------|------------|-----------|------------|------------|
//! | `like`          | liker      | set       | --         | --         |
//! | `comment`       | commenter  | set       | set        | --         |
//! | `follow`        | follower   | --        | --         | --         |
//! | `contact_reply` | -- (admin) | --        | --         | set        |

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// What happened to warrant telling a user about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    ContactReply,
}

impl NotificationKind {
    /// The value stored in the `notifications.kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Like => "like",
            NotificationKind::Comment => "comment",
            NotificationKind::Follow => "follow",
            NotificationKind::ContactReply => "contact_reply",
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(NotificationKind::Like),
            "comment" => Ok(NotificationKind::Comment),
            "follow" => Ok(NotificationKind::Follow),
            "contact_reply" => Ok(NotificationKind::ContactReply),
            other => Err(CoreError::Validation(format!(
                "Unknown notification kind: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity references attached to a notification.
///
/// At most one field is `Some`, matching the kind's row in the table above.
/// Use the constructors rather than building this by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationRefs {
    pub preset_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub contact_id: Option<DbId>,
}

impl NotificationRefs {
    /// No entity reference (follow notifications).
    pub fn none() -> Self {
        Self::default()
    }

    /// Reference a preset (like notifications).
    pub fn preset(preset_id: DbId) -> Self {
        Self {
            preset_id: Some(preset_id),
            ..Self::default()
        }
    }

    /// Reference a preset and the new comment on it (comment notifications).
    pub fn comment(preset_id: DbId, comment_id: DbId) -> Self {
        Self {
            preset_id: Some(preset_id),
            comment_id: Some(comment_id),
            ..Self::default()
        }
    }

    /// Reference a contact message (contact-reply notifications).
    pub fn contact(contact_id: DbId) -> Self {
        Self {
            contact_id: Some(contact_id),
            ..Self::default()
        }
    }

    /// Check this reference set against the kind's fixed mapping.
    pub fn validate_for(&self, kind: NotificationKind) -> Result<(), CoreError> {
        let expected = match kind {
            NotificationKind::Like => (true, false, false),
            NotificationKind::Comment => (true, true, false),
            NotificationKind::Follow => (false, false, false),
            NotificationKind::ContactReply => (false, false, true),
        };
        let actual = (
            self.preset_id.is_some(),
            self.comment_id.is_some(),
            self.contact_id.is_some(),
        );
        if actual != expected {
            return Err(CoreError::Validation(format!(
                "Invalid references for {kind} notification"
            )));
        }
        Ok(())
    }
}
