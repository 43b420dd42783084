//! Recurrence schedule shared by meetings and tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a meeting or task repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    /// One-off, no repetition.
    #[default]
    None,
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every month.
    Monthly,
}

impl Recurrence {
    /// Return the recurrence as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
