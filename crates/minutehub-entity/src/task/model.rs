//! Task entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use minutehub_core::types::{MeetingId, TaskId, UserId};

use crate::attachment::Attachment;
use crate::recurrence::Recurrence;

use super::priority::TaskPriority;
use super::status::TaskStatus;

/// A unit of work assigned to one user by another (self-assignment is
/// allowed, e.g. among executives).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// Detailed description of the work.
    pub description: String,
    /// The user responsible for the task.
    pub assigned_to: UserId,
    /// The user who issued the task.
    pub assigned_by: UserId,
    /// The meeting this task originated from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<MeetingId>,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Priority quadrant.
    pub priority: TaskPriority,
    /// Reason given when the assignee declined intake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Repetition schedule.
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Attachments supplied by the issuer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Completion note supplied by the assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_message: Option<String>,
    /// Completion evidence supplied by the assignee.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub completion_attachments: Vec<Attachment>,
}

impl Task {
    /// Whether the given user is the current assignee.
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assigned_to == user
    }

    /// Whether the task may be purged from the board.
    pub fn is_purgeable(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
