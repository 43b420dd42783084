//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minutehub_core::types::{AuditLogId, UserId};

use crate::user::Department;

use super::action::AuditAction;

/// An immutable audit log entry recording one state-changing action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: AuditLogId,
    /// When the action occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who performed the action.
    pub actor: UserId,
    /// The kind of action performed.
    pub action: AuditAction,
    /// Human-readable description of what happened.
    pub details: String,
    /// The acting user's department.
    pub department: Department,
}
