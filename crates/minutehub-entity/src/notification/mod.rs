//! Notification entity: model, kind, and deep-link target.

pub mod kind;
pub mod model;

pub use kind::{NotificationKind, NotificationLink};
pub use model::Notification;
