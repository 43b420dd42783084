//! Notification kind and deep-link enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A task event (assignment, intake, completion).
    Task,
    /// A meeting event.
    Meeting,
    /// A system-level announcement.
    System,
    /// A rejection event.
    Rejection,
}

impl NotificationKind {
    /// Return the kind as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Meeting => "Meeting",
            Self::System => "System",
            Self::Rejection => "Rejection",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a notification deep-links to in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLink {
    /// The task board.
    Tasks,
    /// The meeting calendar.
    Calendar,
    /// The meeting logs.
    Logs,
}
