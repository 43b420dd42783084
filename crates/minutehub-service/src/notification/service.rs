//! Stateless notification fan-out and feed management.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use minutehub_core::error::AppError;
use minutehub_core::types::{NotificationId, UserId};
use minutehub_entity::notification::{Notification, NotificationKind, NotificationLink};
use minutehub_store::repositories::notification::NotificationRepository;

use crate::context::RequestContext;

/// Fans system events out to the affected user's notification feed.
///
/// There is no delivery guarantee beyond the in-memory store — no
/// retry, no read receipts to the sender.
#[derive(Debug, Clone)]
pub struct NotificationRouter {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationRouter {
    /// Creates a new notification router.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Appends one unread notification to the recipient's feed.
    pub async fn notify(
        &self,
        recipient: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        link_to: Option<NotificationLink>,
        reference_id: Option<String>,
    ) -> Result<Notification, AppError> {
        let notification = Notification {
            id: NotificationId::new(),
            recipient,
            kind,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
            link_to,
            reference_id,
        };
        info!(recipient = %recipient, kind = %kind, "notification delivered");
        self.notif_repo.create(notification).await
    }

    /// Lists the acting user's feed in delivery order.
    pub async fn feed(&self, ctx: &RequestContext) -> Result<Vec<Notification>, AppError> {
        self.notif_repo.find_by_recipient(ctx.user_id).await
    }

    /// Counts the acting user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks every notification for the acting user as read, in place.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Removes exactly one notification by id, regardless of read state.
    ///
    /// Dismissing an absent id is a silent no-op.
    pub async fn dismiss(&self, id: NotificationId) -> Result<(), AppError> {
        self.notif_repo.dismiss(id).await?;
        Ok(())
    }
}
