//! Audit recording.

pub mod service;

pub use service::AuditRecorder;
