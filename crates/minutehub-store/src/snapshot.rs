//! JSON snapshot persistence.
//!
//! Each collection round-trips through JSON exactly: deserializing a
//! just-serialized snapshot reproduces the collections with the same
//! ids, field values, and insertion order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use minutehub_core::error::AppError;
use minutehub_core::result::AppResult;
use minutehub_core::types::UserId;
use minutehub_entity::audit::AuditLogEntry;
use minutehub_entity::meeting::Meeting;
use minutehub_entity::notification::Notification;
use minutehub_entity::task::Task;
use minutehub_entity::user::User;

/// Serialized form of the whole entity store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Personnel directory.
    #[serde(default)]
    pub users: Vec<User>,
    /// Task board.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Meeting calendar.
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    /// Notification feeds.
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Audit trail.
    #[serde(default)]
    pub audit_logs: Vec<AuditLogEntry>,
    /// Role designation titles.
    #[serde(default)]
    pub designations: Vec<String>,
    /// The user signed in to this session, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<UserId>,
}

impl StoreSnapshot {
    /// Serialize the snapshot to JSON.
    pub fn to_json(&self, pretty: bool) -> AppResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Deserialize a snapshot from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write a snapshot to a file.
pub async fn write_snapshot(
    path: impl AsRef<Path>,
    snapshot: &StoreSnapshot,
    pretty: bool,
) -> AppResult<()> {
    let json = snapshot.to_json(pretty)?;
    tokio::fs::write(path.as_ref(), json)
        .await
        .map_err(|e| AppError::storage(format!("Failed to write snapshot: {e}")))?;
    debug!(path = %path.as_ref().display(), "snapshot written");
    Ok(())
}

/// Read a snapshot from a file.
pub async fn read_snapshot(path: impl AsRef<Path>) -> AppResult<StoreSnapshot> {
    let json = tokio::fs::read_to_string(path.as_ref())
        .await
        .map_err(|e| {
            AppError::storage(format!(
                "Failed to read snapshot '{}': {e}",
                path.as_ref().display()
            ))
        })?;
    StoreSnapshot::from_json(&json)
}
