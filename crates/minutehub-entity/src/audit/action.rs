//! Audit action kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use minutehub_core::AppError;

/// The kind of state-changing action an audit entry records.
///
/// Serialized as the display strings the record keeps in exports, e.g.
/// `"Task Record Removed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// A task was issued.
    #[serde(rename = "Task Assigned")]
    TaskAssigned,
    /// A task changed lifecycle status.
    #[serde(rename = "Task Status Update")]
    TaskStatusUpdate,
    /// A completed task was purged from the board.
    #[serde(rename = "Task Record Removed")]
    TaskDeleted,
    /// A meeting was scheduled.
    #[serde(rename = "Meeting Scheduled")]
    MeetingScheduled,
    /// A still-open meeting record was edited.
    #[serde(rename = "Meeting Updated")]
    MeetingUpdated,
    /// A meeting record reached full sign-off and was locked.
    #[serde(rename = "Meeting Finalized")]
    MeetingFinalized,
    /// Reserved: a meeting record was rejected.
    #[serde(rename = "Meeting Records Rejected")]
    MeetingRejected,
    /// A user authenticated a session.
    #[serde(rename = "User Login")]
    Login,
    /// A personnel record was created or updated.
    #[serde(rename = "Personnel Record Updated")]
    PersonnelUpdate,
    /// A new role designation was created.
    #[serde(rename = "New Designation Created")]
    DesignationAdded,
}

impl AuditAction {
    /// Return the action as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskAssigned => "Task Assigned",
            Self::TaskStatusUpdate => "Task Status Update",
            Self::TaskDeleted => "Task Record Removed",
            Self::MeetingScheduled => "Meeting Scheduled",
            Self::MeetingUpdated => "Meeting Updated",
            Self::MeetingFinalized => "Meeting Finalized",
            Self::MeetingRejected => "Meeting Records Rejected",
            Self::Login => "User Login",
            Self::PersonnelUpdate => "Personnel Record Updated",
            Self::DesignationAdded => "New Designation Created",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Task Assigned" => Ok(Self::TaskAssigned),
            "Task Status Update" => Ok(Self::TaskStatusUpdate),
            "Task Record Removed" => Ok(Self::TaskDeleted),
            "Meeting Scheduled" => Ok(Self::MeetingScheduled),
            "Meeting Updated" => Ok(Self::MeetingUpdated),
            "Meeting Finalized" => Ok(Self::MeetingFinalized),
            "Meeting Records Rejected" => Ok(Self::MeetingRejected),
            "User Login" => Ok(Self::Login),
            "Personnel Record Updated" => Ok(Self::PersonnelUpdate),
            "New Designation Created" => Ok(Self::DesignationAdded),
            _ => Err(AppError::validation(format!("Invalid audit action: '{s}'"))),
        }
    }
}
