//! Task priority quadrants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority quadrant of a task. Q1 is the most critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Critical.
    Q1,
    /// Important (default).
    Q2,
    /// Standard.
    Q3,
}

impl TaskPriority {
    /// Return the numeric urgency (higher = more critical).
    pub fn numeric_urgency(&self) -> u8 {
        match self {
            Self::Q1 => 3,
            Self::Q2 => 2,
            Self::Q3 => 1,
        }
    }

    /// Return the priority as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Q2
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = minutehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            _ => Err(minutehub_core::AppError::validation(format!(
                "Invalid task priority: '{s}'. Expected one of: Q1, Q2, Q3"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_ordering() {
        assert!(TaskPriority::Q1.numeric_urgency() > TaskPriority::Q2.numeric_urgency());
        assert!(TaskPriority::Q2.numeric_urgency() > TaskPriority::Q3.numeric_urgency());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Q1".parse::<TaskPriority>().unwrap(), TaskPriority::Q1);
        assert!("critical".parse::<TaskPriority>().is_err());
    }
}
