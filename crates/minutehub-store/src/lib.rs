//! # minutehub-store
//!
//! The entity store: one in-memory repository per collection, an
//! aggregate [`Store`] that owns them all, and JSON snapshot persistence.
//!
//! Every browser session of the original application held its own
//! private copy of the collections; the store mirrors that model — a
//! single logical actor per operation, no cross-session contention.
//! Repositories are still async behind `tokio::sync::RwLock` so that a
//! database-backed implementation can be substituted later without
//! touching the service layer.

pub mod repositories;
pub mod snapshot;
pub mod store;

pub use snapshot::StoreSnapshot;
pub use store::Store;
