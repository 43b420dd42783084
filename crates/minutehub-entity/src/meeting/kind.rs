//! Meeting kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of session being held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingType {
    /// Routine operational session (default).
    #[default]
    Standard,
    /// Board-level strategic session.
    Strategic,
    /// Travel itinerary session with visited cities.
    Travel,
}

impl MeetingType {
    /// Return the kind as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Strategic => "Strategic",
            Self::Travel => "Travel",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
