//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minutehub_core::types::{NotificationId, UserId};

use super::kind::{NotificationKind, NotificationLink};

/// A notification delivered to one user's feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub recipient: UserId,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub read: bool,
    /// Optional deep-link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_to: Option<NotificationLink>,
    /// Optional id of the entity the notification refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
