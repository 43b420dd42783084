//! Capability enforcement — checks whether a role holds a capability.

use minutehub_core::error::AppError;
use minutehub_entity::user::Role;

use super::policies::{Capability, CapabilityPolicies};

/// Enforces workspace-level capabilities for engine operations.
#[derive(Debug, Clone, Default)]
pub struct CapabilityEnforcer {
    /// The policy configuration.
    policies: CapabilityPolicies,
}

impl CapabilityEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: CapabilityPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: CapabilityPolicies) -> Self {
        Self { policies }
    }

    /// Checks whether the given role holds the capability.
    ///
    /// Returns `Ok(())` if allowed, or an `Authorization` error if denied.
    pub fn require(&self, role: &Role, capability: Capability) -> Result<(), AppError> {
        if self.policies.allows(role, capability) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not hold capability '{capability:?}'"
            )))
        }
    }

    /// Checks whether the role holds the capability (returns bool).
    pub fn can(&self, role: &Role, capability: Capability) -> bool {
        self.policies.allows(role, capability)
    }
}
