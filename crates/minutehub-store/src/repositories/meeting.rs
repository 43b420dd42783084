//! Meeting repository implementation.

use std::sync::Arc;

use tokio::sync::RwLock;

use minutehub_core::error::AppError;
use minutehub_core::result::AppResult;
use minutehub_core::types::{MeetingId, UserId};
use minutehub_entity::meeting::Meeting;
use minutehub_entity::user::Department;

/// Repository for the meeting calendar.
#[derive(Debug, Clone, Default)]
pub struct MeetingRepository {
    meetings: Arc<RwLock<Vec<Meeting>>>,
}

impl MeetingRepository {
    /// Create an empty meeting repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a meeting by id.
    pub async fn find_by_id(&self, id: MeetingId) -> AppResult<Option<Meeting>> {
        let meetings = self.meetings.read().await;
        Ok(meetings.iter().find(|m| m.id == id).cloned())
    }

    /// List every meeting in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Meeting>> {
        Ok(self.meetings.read().await.clone())
    }

    /// List meetings the given user attends.
    pub async fn find_by_attendee(&self, attendee: UserId) -> AppResult<Vec<Meeting>> {
        let meetings = self.meetings.read().await;
        Ok(meetings
            .iter()
            .filter(|m| m.is_attendee(attendee))
            .cloned()
            .collect())
    }

    /// List meetings hosted by one department.
    pub async fn find_by_department(&self, department: Department) -> AppResult<Vec<Meeting>> {
        let meetings = self.meetings.read().await;
        Ok(meetings
            .iter()
            .filter(|m| m.department == department)
            .cloned()
            .collect())
    }

    /// Append a new meeting.
    pub async fn create(&self, meeting: Meeting) -> AppResult<Meeting> {
        let mut meetings = self.meetings.write().await;
        meetings.push(meeting.clone());
        Ok(meeting)
    }

    /// Replace an existing meeting by id.
    pub async fn update(&self, meeting: &Meeting) -> AppResult<Meeting> {
        let mut meetings = self.meetings.write().await;
        match meetings.iter_mut().find(|m| m.id == meeting.id) {
            Some(existing) => {
                *existing = meeting.clone();
                Ok(meeting.clone())
            }
            None => Err(AppError::not_found(format!(
                "Meeting {} not found",
                meeting.id
            ))),
        }
    }

    /// Count meetings.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.meetings.read().await.len() as u64)
    }

    /// Export the full collection for snapshotting.
    pub async fn dump(&self) -> Vec<Meeting> {
        self.meetings.read().await.clone()
    }

    /// Replace the full collection from a snapshot.
    pub async fn restore(&self, meetings: Vec<Meeting>) {
        *self.meetings.write().await = meetings;
    }
}
