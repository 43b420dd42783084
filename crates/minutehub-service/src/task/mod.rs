//! Task lifecycle engine.

pub mod service;

pub use service::{TaskService, TransitionDetails};
