//! Task status enumeration and the legal transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use minutehub_core::AppError;

/// Status of a task in its approval lifecycle.
///
/// A task is created awaiting intake (`PendingApproval`). The assignee
/// either acknowledges it (`Approved`) or declines it with a reason
/// (`Rejected`). Acknowledged work moves between `InProgress` and the
/// on-hold `Pending` state until it is `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Awaiting assignee intake acknowledgment.
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    /// Assignee has acknowledged responsibility.
    Approved,
    /// On hold, reversible by the assignee.
    Pending,
    /// Actively being worked.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished; terminal apart from deletion.
    Completed,
    /// Declined at intake; terminal.
    Rejected,
}

impl TaskStatus {
    /// Check if the status is terminal (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Check whether moving to `to` is a legal transition.
    ///
    /// The engine re-validates with this table regardless of what the
    /// caller offered; a redundant same-status update is not legal.
    pub fn can_transition_to(&self, to: TaskStatus) -> bool {
        matches!(
            (self, to),
            (Self::PendingApproval, Self::Approved)
                | (Self::PendingApproval, Self::Rejected)
                | (Self::Approved, Self::InProgress)
                | (Self::Approved, Self::Pending)
                | (Self::InProgress, Self::Pending)
                | (Self::InProgress, Self::Completed)
                | (Self::Pending, Self::Approved)
                | (Self::Pending, Self::InProgress)
        )
    }

    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "Pending Approval",
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending Approval" => Ok(Self::PendingApproval),
            "Approved" => Ok(Self::Approved),
            "Pending" => Ok(Self::Pending),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(AppError::validation(format!("Invalid task status: '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_transitions() {
        assert!(TaskStatus::PendingApproval.can_transition_to(TaskStatus::Approved));
        assert!(TaskStatus::PendingApproval.can_transition_to(TaskStatus::Rejected));
        assert!(!TaskStatus::PendingApproval.can_transition_to(TaskStatus::InProgress));
        assert!(!TaskStatus::PendingApproval.can_transition_to(TaskStatus::Completed));
    }

    #[test]
    fn test_hold_is_reversible() {
        assert!(TaskStatus::Approved.can_transition_to(TaskStatus::Pending));
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Pending));
        assert!(TaskStatus::Pending.can_transition_to(TaskStatus::Approved));
        assert!(TaskStatus::Pending.can_transition_to(TaskStatus::InProgress));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for to in [
            TaskStatus::PendingApproval,
            TaskStatus::Approved,
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Rejected,
        ] {
            assert!(!TaskStatus::Completed.can_transition_to(to));
            assert!(!TaskStatus::Rejected.can_transition_to(to));
        }
    }

    #[test]
    fn test_redundant_update_is_illegal() {
        for status in [
            TaskStatus::PendingApproval,
            TaskStatus::Approved,
            TaskStatus::Pending,
            TaskStatus::InProgress,
        ] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_serde_display_strings() {
        let json = serde_json::to_string(&TaskStatus::PendingApproval).unwrap();
        assert_eq!(json, "\"Pending Approval\"");
        let parsed: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
    }
}
