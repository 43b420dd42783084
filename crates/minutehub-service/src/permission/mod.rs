//! Capability-based permission checks.
//!
//! Role capabilities are evaluated once per operation through
//! [`CapabilityEnforcer`] instead of being re-derived ad hoc at each
//! call site.

pub mod enforcer;
pub mod policies;

pub use enforcer::CapabilityEnforcer;
pub use policies::{Capability, CapabilityPolicies};
