//! Append-only audit recording and guarded trail reads.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use minutehub_core::error::AppError;
use minutehub_core::types::AuditLogId;
use minutehub_entity::audit::{AuditAction, AuditLogEntry};
use minutehub_store::repositories::audit::{AuditLogRepository, AuditSearch};

use crate::context::RequestContext;
use crate::permission::{Capability, CapabilityEnforcer};

/// Records every state-changing action, attributed to the acting user.
///
/// The recorder guarantees total, causally ordered insertion; newest-
/// first display belongs to readers.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    /// Audit log repository.
    audit_repo: Arc<AuditLogRepository>,
    /// Capability enforcer for trail reads.
    enforcer: CapabilityEnforcer,
}

impl AuditRecorder {
    /// Creates a new audit recorder.
    pub fn new(audit_repo: Arc<AuditLogRepository>) -> Self {
        Self {
            audit_repo,
            enforcer: CapabilityEnforcer::new(),
        }
    }

    /// Appends one entry for the acting user.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        action: AuditAction,
        details: impl Into<String>,
    ) -> Result<AuditLogEntry, AppError> {
        let entry = AuditLogEntry {
            id: AuditLogId::new(),
            timestamp: Utc::now(),
            actor: ctx.user_id,
            action,
            details: details.into(),
            department: ctx.department,
        };
        debug!(actor = %entry.actor, action = %entry.action, "audit entry recorded");
        self.audit_repo.append(entry).await
    }

    /// Searches the trail. Restricted to roles with trail access.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        filters: &AuditSearch,
    ) -> Result<Vec<AuditLogEntry>, AppError> {
        self.enforcer
            .require(&ctx.role, Capability::ViewAuditTrail)?;
        self.audit_repo.search(filters).await
    }

    /// Counts all entries.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.audit_repo.count().await
    }
}
