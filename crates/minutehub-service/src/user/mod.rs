//! Personnel, session, and designation management.

pub mod service;

pub use service::UserService;
