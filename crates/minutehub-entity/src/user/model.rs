//! User entity model.

use serde::{Deserialize, Serialize};

use minutehub_core::types::UserId;

use super::org::{Department, Region, Team};
use super::role::Role;

/// A registered member of the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role designation (built-in or custom).
    pub role: Role,
    /// Home department.
    pub department: Department,
    /// Working team, if any.
    #[serde(default)]
    pub team: Team,
    /// Sales region, if any.
    #[serde(default)]
    pub region: Region,
    /// The user this person reports to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_to: Option<UserId>,
    /// Whether this user is a medical sales division representative.
    #[serde(default)]
    pub is_msd: bool,
}

impl User {
    /// Whether the user sits on the executive management tier.
    pub fn is_executive(&self) -> bool {
        self.role.is_executive()
    }

    /// Whether the user is the Chairman.
    pub fn is_chairman(&self) -> bool {
        self.role.is_chairman()
    }

    /// Whether the user heads a department.
    pub fn is_hod(&self) -> bool {
        self.role.is_hod()
    }
}
