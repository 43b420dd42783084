//! Designation list repository implementation.

use std::sync::Arc;

use tokio::sync::RwLock;

use minutehub_core::result::AppResult;
use minutehub_entity::user::role::BUILT_IN_DESIGNATIONS;

/// Repository for the list of role designation titles.
///
/// Seeded with the built-in designations; the Chairman may append
/// additional unique titles at runtime.
#[derive(Debug, Clone)]
pub struct DesignationRepository {
    titles: Arc<RwLock<Vec<String>>>,
}

impl DesignationRepository {
    /// Create a repository seeded with the built-in designations.
    pub fn new() -> Self {
        Self {
            titles: Arc::new(RwLock::new(
                BUILT_IN_DESIGNATIONS.iter().map(|s| s.to_string()).collect(),
            )),
        }
    }

    /// List every designation title in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<String>> {
        Ok(self.titles.read().await.clone())
    }

    /// Whether a title already exists.
    pub async fn contains(&self, title: &str) -> AppResult<bool> {
        let titles = self.titles.read().await;
        Ok(titles.iter().any(|t| t == title))
    }

    /// Append a title if it is not already present.
    ///
    /// Returns `true` when the title was appended.
    pub async fn append_unique(&self, title: &str) -> AppResult<bool> {
        let mut titles = self.titles.write().await;
        if titles.iter().any(|t| t == title) {
            Ok(false)
        } else {
            titles.push(title.to_string());
            Ok(true)
        }
    }

    /// Export the full list for snapshotting.
    pub async fn dump(&self) -> Vec<String> {
        self.titles.read().await.clone()
    }

    /// Replace the full list from a snapshot.
    pub async fn restore(&self, titles: Vec<String>) {
        *self.titles.write().await = titles;
    }
}

impl Default for DesignationRepository {
    fn default() -> Self {
        Self::new()
    }
}
