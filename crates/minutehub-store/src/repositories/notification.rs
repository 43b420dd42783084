//! Notification repository implementation.

use std::sync::Arc;

use tokio::sync::RwLock;

use minutehub_core::result::AppResult;
use minutehub_core::types::{NotificationId, UserId};
use minutehub_entity::notification::Notification;

/// Repository for per-user notification feeds.
#[derive(Debug, Clone, Default)]
pub struct NotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationRepository {
    /// Create an empty notification repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// List notifications for one recipient, in delivery order.
    pub async fn find_by_recipient(&self, recipient: UserId) -> AppResult<Vec<Notification>> {
        let notifications = self.notifications.read().await;
        Ok(notifications
            .iter()
            .filter(|n| n.recipient == recipient)
            .cloned()
            .collect())
    }

    /// Count unread notifications for one recipient.
    pub async fn count_unread(&self, recipient: UserId) -> AppResult<u64> {
        let notifications = self.notifications.read().await;
        Ok(notifications
            .iter()
            .filter(|n| n.recipient == recipient && n.is_unread())
            .count() as u64)
    }

    /// Append a notification to the feed.
    pub async fn create(&self, notification: Notification) -> AppResult<Notification> {
        let mut notifications = self.notifications.write().await;
        notifications.push(notification.clone());
        Ok(notification)
    }

    /// Mark every notification for one recipient as read, in place.
    ///
    /// Returns the number of notifications flipped.
    pub async fn mark_all_read(&self, recipient: UserId) -> AppResult<u64> {
        let mut notifications = self.notifications.write().await;
        let mut flipped = 0;
        for notification in notifications
            .iter_mut()
            .filter(|n| n.recipient == recipient && !n.read)
        {
            notification.read = true;
            flipped += 1;
        }
        Ok(flipped)
    }

    /// Remove exactly one notification by id, regardless of read state.
    ///
    /// Returns `true` if a record was removed; an absent id is a no-op.
    pub async fn dismiss(&self, id: NotificationId) -> AppResult<bool> {
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        Ok(notifications.len() < before)
    }

    /// Count all notifications.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.notifications.read().await.len() as u64)
    }

    /// Export the full collection for snapshotting.
    pub async fn dump(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    /// Replace the full collection from a snapshot.
    pub async fn restore(&self, notifications: Vec<Notification>) {
        *self.notifications.write().await = notifications;
    }
}
