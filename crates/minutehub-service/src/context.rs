//! Request context carrying the acting user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minutehub_core::types::UserId;
use minutehub_entity::user::{Department, Role, User};

/// Context for the current signed-in user.
///
/// Built at login and passed into every engine method so each operation
/// knows *who* is acting. The sign-in is a local directory lookup, not
/// a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's ID.
    pub user_id: UserId,
    /// The acting user's full name.
    pub name: String,
    /// The acting user's role designation.
    pub role: Role,
    /// The acting user's department.
    pub department: Department,
    /// When the context was created.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Build a context for the given user.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            role: user.role.clone(),
            department: user.department,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the acting user sits on the executive tier.
    pub fn is_executive(&self) -> bool {
        self.role.is_executive()
    }

    /// Returns whether the acting user is the Chairman.
    pub fn is_chairman(&self) -> bool {
        self.role.is_chairman()
    }
}
