//! Organizational role designations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's role designation in the organizational hierarchy.
///
/// Eight designations are built in; the Chairman may create additional
/// custom designations at runtime, which carry rank-and-file capability.
/// Roles serialize as their bare display string so custom designations
/// and built-ins share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Chairman of the board; highest authority.
    Chairman,
    /// Chief Executive Officer.
    Ceo,
    /// Chief Operating Officer.
    Coo,
    /// Managing Director.
    Md,
    /// Chief Financial Officer.
    Cfo,
    /// Head of Department.
    Hod,
    /// Senior staff member.
    Senior,
    /// Junior staff member.
    Junior,
    /// A custom designation created by the Chairman.
    Custom(String),
}

/// The built-in designation titles, in hierarchy order.
pub const BUILT_IN_DESIGNATIONS: [&str; 8] = [
    "Chairman", "CEO", "COO", "MD", "CFO", "HOD", "Senior", "Junior",
];

impl Role {
    /// Whether this role sits on the executive management tier.
    pub fn is_executive(&self) -> bool {
        matches!(
            self,
            Self::Chairman | Self::Ceo | Self::Coo | Self::Md | Self::Cfo
        )
    }

    /// Whether this role is the Chairman.
    pub fn is_chairman(&self) -> bool {
        matches!(self, Self::Chairman)
    }

    /// Whether this role heads a department.
    pub fn is_hod(&self) -> bool {
        matches!(self, Self::Hod)
    }

    /// Return the role as its display string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Chairman => "Chairman",
            Self::Ceo => "CEO",
            Self::Coo => "COO",
            Self::Md => "MD",
            Self::Cfo => "CFO",
            Self::Hod => "HOD",
            Self::Senior => "Senior",
            Self::Junior => "Junior",
            Self::Custom(title) => title,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Chairman" => Self::Chairman,
            "CEO" => Self::Ceo,
            "COO" => Self::Coo,
            "MD" => Self::Md,
            "CFO" => Self::Cfo,
            "HOD" => Self::Hod,
            "Senior" => Self::Senior,
            "Junior" => Self::Junior,
            _ => Self::Custom(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> String {
        role.as_str().to_string()
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}
