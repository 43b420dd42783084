//! Meeting finalization engine.

pub mod service;

pub use service::{MeetingService, ScheduleMeetingRequest, UpdateMeetingRequest};
