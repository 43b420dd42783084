//! Audit log repository implementation.
//!
//! The log is append-only: entries are never mutated or deleted, and
//! insertion order is the causal order. Newest-first display is a
//! presentation concern handled by readers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use minutehub_core::result::AppResult;
use minutehub_core::types::pagination::{PageRequest, PageResponse};
use minutehub_core::types::UserId;
use minutehub_entity::audit::{AuditAction, AuditLogEntry};
use minutehub_entity::user::Department;

/// Filters for searching the audit log.
#[derive(Debug, Clone, Default)]
pub struct AuditSearch {
    /// Restrict to one actor.
    pub actor: Option<UserId>,
    /// Restrict to one action kind.
    pub action: Option<AuditAction>,
    /// Restrict to one department.
    pub department: Option<Department>,
    /// Case-insensitive substring of the details text.
    pub details_contains: Option<String>,
}

/// Append-only repository for the audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditLogRepository {
    entries: Arc<RwLock<Vec<AuditLogEntry>>>,
}

impl AuditLogRepository {
    /// Create an empty audit log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after all existing ones.
    pub async fn append(&self, entry: AuditLogEntry) -> AppResult<AuditLogEntry> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(entry)
    }

    /// List every entry in insertion order.
    pub async fn find_all(&self) -> AppResult<Vec<AuditLogEntry>> {
        Ok(self.entries.read().await.clone())
    }

    /// Search the log with the given filters, in insertion order.
    pub async fn search(&self, filters: &AuditSearch) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.entries.read().await;
        let needle = filters
            .details_contains
            .as_ref()
            .map(|s| s.to_lowercase());
        Ok(entries
            .iter()
            .filter(|e| filters.actor.is_none_or(|actor| e.actor == actor))
            .filter(|e| filters.action.is_none_or(|action| e.action == action))
            .filter(|e| filters.department.is_none_or(|dept| e.department == dept))
            .filter(|e| {
                needle
                    .as_ref()
                    .is_none_or(|n| e.details.to_lowercase().contains(n))
            })
            .cloned()
            .collect())
    }

    /// Search the log and return one newest-first page.
    pub async fn search_page(
        &self,
        filters: &AuditSearch,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLogEntry>> {
        let mut matches = self.search(filters).await?;
        matches.reverse();
        let total = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    /// List entries recorded at or after the given time.
    pub async fn find_since(&self, since: DateTime<Utc>) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| e.timestamp >= since)
            .cloned()
            .collect())
    }

    /// Count entries.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.entries.read().await.len() as u64)
    }

    /// Export the full collection for snapshotting.
    pub async fn dump(&self) -> Vec<AuditLogEntry> {
        self.entries.read().await.clone()
    }

    /// Replace the full collection from a snapshot.
    pub async fn restore(&self, entries: Vec<AuditLogEntry>) {
        *self.entries.write().await = entries;
    }
}
