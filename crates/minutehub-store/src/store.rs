//! The aggregate entity store.

use std::sync::Arc;

use minutehub_core::result::AppResult;

use crate::repositories::{
    AuditLogRepository, DesignationRepository, MeetingRepository, NotificationRepository,
    SessionRepository, TaskRepository, UserRepository,
};
use crate::snapshot::StoreSnapshot;

/// Owns every collection repository.
///
/// The store is passed by reference into each engine (constructor
/// injection of the individual repositories), so a database-backed
/// implementation can be substituted later without ambient globals.
#[derive(Debug, Clone)]
pub struct Store {
    /// Personnel directory.
    pub users: Arc<UserRepository>,
    /// Task board.
    pub tasks: Arc<TaskRepository>,
    /// Meeting calendar.
    pub meetings: Arc<MeetingRepository>,
    /// Notification feeds.
    pub notifications: Arc<NotificationRepository>,
    /// Audit trail.
    pub audit_logs: Arc<AuditLogRepository>,
    /// Role designation titles.
    pub designations: Arc<DesignationRepository>,
    /// Current session.
    pub session: Arc<SessionRepository>,
}

impl Store {
    /// Create an empty store with the built-in designations seeded.
    pub fn new() -> Self {
        Self {
            users: Arc::new(UserRepository::new()),
            tasks: Arc::new(TaskRepository::new()),
            meetings: Arc::new(MeetingRepository::new()),
            notifications: Arc::new(NotificationRepository::new()),
            audit_logs: Arc::new(AuditLogRepository::new()),
            designations: Arc::new(DesignationRepository::new()),
            session: Arc::new(SessionRepository::new()),
        }
    }

    /// Export every collection into a snapshot.
    pub async fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            users: self.users.dump().await,
            tasks: self.tasks.dump().await,
            meetings: self.meetings.dump().await,
            notifications: self.notifications.dump().await,
            audit_logs: self.audit_logs.dump().await,
            designations: self.designations.dump().await,
            current_user: self.session.dump().await,
        }
    }

    /// Replace every collection from a snapshot.
    pub async fn restore(&self, snapshot: StoreSnapshot) -> AppResult<()> {
        self.users.restore(snapshot.users).await;
        self.tasks.restore(snapshot.tasks).await;
        self.meetings.restore(snapshot.meetings).await;
        self.notifications.restore(snapshot.notifications).await;
        self.audit_logs.restore(snapshot.audit_logs).await;
        self.designations.restore(snapshot.designations).await;
        self.session.restore(snapshot.current_user).await;
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
