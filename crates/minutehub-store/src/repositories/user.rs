//! User repository implementation.

use std::sync::Arc;

use tokio::sync::RwLock;

use minutehub_core::result::AppResult;
use minutehub_core::types::UserId;
use minutehub_entity::user::{Department, User};

/// Repository for the personnel directory.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserRepository {
    /// Create an empty user repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    /// Find a user by full name, case-insensitively.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// List every user in directory order.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    /// List users belonging to one department.
    pub async fn find_by_department(&self, department: Department) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.department == department)
            .cloned()
            .collect())
    }

    /// Insert a new user or replace an existing record with the same id.
    ///
    /// Returns `true` when a new record was inserted.
    pub async fn upsert(&self, user: User) -> AppResult<bool> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user;
            Ok(false)
        } else {
            users.push(user);
            Ok(true)
        }
    }

    /// Count users.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }

    /// Export the full collection for snapshotting.
    pub async fn dump(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Replace the full collection from a snapshot.
    pub async fn restore(&self, users: Vec<User>) {
        *self.users.write().await = users;
    }
}
