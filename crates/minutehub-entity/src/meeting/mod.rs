//! Meeting entity: model, minutes representation, and meeting kinds.

pub mod kind;
pub mod minutes;
pub mod model;

pub use kind::MeetingType;
pub use minutes::{MinuteRow, Minutes};
pub use model::Meeting;
