//! Role-to-capability mapping definitions.

use serde::{Deserialize, Serialize};

use minutehub_entity::user::Role;

/// A workspace-level capability (distinct from the assignee-only rules
/// the lifecycle engines check against the target entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Issue a standalone directive to a user.
    IssueDirective,
    /// Purge a completed task from the board.
    PurgeTask,
    /// Schedule or log a meeting.
    ScheduleMeeting,
    /// Create or update personnel records.
    ManagePersonnel,
    /// Create new role designations.
    ManageDesignations,
    /// Read the audit trail.
    ViewAuditTrail,
}

/// Defines which roles hold which capabilities.
///
/// Custom designations carry rank-and-file capability, so the mapping is
/// expressed over role predicates rather than a per-variant table.
#[derive(Debug, Clone, Default)]
pub struct CapabilityPolicies;

impl CapabilityPolicies {
    /// Create the default policy set.
    pub fn new() -> Self {
        Self
    }

    /// Whether the given role holds the capability.
    pub fn allows(&self, role: &Role, capability: Capability) -> bool {
        match capability {
            Capability::IssueDirective => role.is_executive() || role.is_hod(),
            // Deletion is gated by task state alone; every role may purge
            // a completed record it can see.
            Capability::PurgeTask => true,
            Capability::ScheduleMeeting => true,
            Capability::ManagePersonnel => role.is_chairman(),
            Capability::ManageDesignations => role.is_chairman(),
            Capability::ViewAuditTrail => matches!(role, Role::Chairman | Role::Ceo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_issuance_is_executive_or_hod() {
        let policies = CapabilityPolicies::new();
        assert!(policies.allows(&Role::Md, Capability::IssueDirective));
        assert!(policies.allows(&Role::Hod, Capability::IssueDirective));
        assert!(!policies.allows(&Role::Junior, Capability::IssueDirective));
        assert!(!policies.allows(
            &Role::Custom("Regional Auditor".into()),
            Capability::IssueDirective
        ));
    }

    #[test]
    fn test_chairman_only_capabilities() {
        let policies = CapabilityPolicies::new();
        assert!(policies.allows(&Role::Chairman, Capability::ManagePersonnel));
        assert!(!policies.allows(&Role::Ceo, Capability::ManagePersonnel));
        assert!(!policies.allows(&Role::Hod, Capability::ManageDesignations));
    }

    #[test]
    fn test_audit_trail_is_chairman_and_ceo() {
        let policies = CapabilityPolicies::new();
        assert!(policies.allows(&Role::Chairman, Capability::ViewAuditTrail));
        assert!(policies.allows(&Role::Ceo, Capability::ViewAuditTrail));
        assert!(!policies.allows(&Role::Md, Capability::ViewAuditTrail));
    }
}
