//! Directive issuance.

pub mod service;

pub use service::{DirectiveService, IssueTaskRequest, TaskProposal};
