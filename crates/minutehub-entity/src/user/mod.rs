//! User entity: model, role designations, and organizational units.

pub mod model;
pub mod org;
pub mod role;

pub use model::User;
pub use org::{Department, Region, Team};
pub use role::Role;
