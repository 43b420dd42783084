//! Shared fixtures for the engine integration tests.

use std::sync::Arc;

use chrono::NaiveDate;

use minutehub_core::types::UserId;
use minutehub_entity::user::{Department, Region, Role, Team, User};
use minutehub_service::{
    AuditRecorder, DirectiveService, MeetingService, NotificationRouter, RequestContext,
    TaskService, UserService,
};
use minutehub_store::Store;

/// A fully wired engine stack over one fresh in-memory store.
pub struct TestApp {
    pub store: Store,
    pub tasks: TaskService,
    pub meetings: MeetingService,
    pub directives: DirectiveService,
    pub notifier: NotificationRouter,
    pub audit: AuditRecorder,
    pub users: UserService,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Store::new();
        let audit = AuditRecorder::new(store.audit_logs.clone());
        let notifier = NotificationRouter::new(store.notifications.clone());
        let tasks = TaskService::new(store.tasks.clone(), notifier.clone(), audit.clone());
        let meetings = MeetingService::new(store.meetings.clone(), audit.clone());
        let directives = DirectiveService::new(
            store.tasks.clone(),
            store.users.clone(),
            notifier.clone(),
            audit.clone(),
        );
        let users = UserService::new(
            store.users.clone(),
            store.tasks.clone(),
            store.designations.clone(),
            store.session.clone(),
            audit.clone(),
        );
        Self {
            store,
            tasks,
            meetings,
            directives,
            notifier,
            audit,
            users,
        }
    }

    /// Register a user directly in the store and return their context.
    pub async fn seed_user(
        &self,
        name: &str,
        role: Role,
        department: Department,
    ) -> (User, RequestContext) {
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: format!(
                "{}@pharma.example",
                name.to_lowercase().replace(' ', ".")
            ),
            role,
            department,
            team: Team::None,
            region: Region::None,
            reports_to: None,
            is_msd: false,
        };
        self.store.users.upsert(user.clone()).await.unwrap();
        let ctx = RequestContext::for_user(&user);
        (user, ctx)
    }
}

/// A convenient fixed due date.
pub fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
}
