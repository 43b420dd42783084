//! Meeting entity model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minutehub_core::types::{MeetingId, UserId};

use crate::attachment::Attachment;
use crate::recurrence::Recurrence;
use crate::user::{Department, Region, Team};

use super::kind::MeetingType;
use super::minutes::Minutes;

/// A scheduled or logged meeting session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique meeting identifier.
    pub id: MeetingId,
    /// Session title.
    pub title: String,
    /// What the session is about.
    pub description: String,
    /// When the session starts.
    pub start_time: DateTime<Utc>,
    /// When the session ends.
    pub end_time: DateTime<Utc>,
    /// Room or venue.
    pub location: String,
    /// Hosting department.
    pub department: Department,
    /// Hosting team, if any.
    #[serde(default)]
    pub team: Team,
    /// Hosting region, if any.
    #[serde(default)]
    pub region: Region,
    /// The user who scheduled the session.
    pub organizer: UserId,
    /// The designated meeting leader.
    pub leader: UserId,
    /// Users expected in the session.
    pub attendees: Vec<UserId>,
    /// Attendees who have signed off on the minutes.
    #[serde(default)]
    pub finalized_by: Vec<UserId>,
    /// Reserved: per-user rejection reasons. No operation populates or
    /// reads this today.
    #[serde(default)]
    pub rejected_by: HashMap<UserId, String>,
    /// Recorded minutes.
    #[serde(default)]
    pub minutes: Minutes,
    /// Whether the location is a custom room rather than a listed one.
    #[serde(default)]
    pub is_custom_room: bool,
    /// Kind of session.
    #[serde(default)]
    pub kind: MeetingType,
    /// Repetition schedule.
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Attached documents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Cities visited, for travel sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_cities: Option<String>,
}

impl Meeting {
    /// Whether every attendee has signed off on the minutes.
    ///
    /// A meeting with no attendees is never finalized.
    pub fn is_finalized(&self) -> bool {
        !self.attendees.is_empty()
            && self
                .attendees
                .iter()
                .all(|attendee| self.finalized_by.contains(attendee))
    }

    /// Whether the given user has personally signed off.
    pub fn has_finalized(&self, user: UserId) -> bool {
        self.finalized_by.contains(&user)
    }

    /// Whether the given user is on the attendee roster.
    pub fn is_attendee(&self, user: UserId) -> bool {
        self.attendees.contains(&user)
    }

    /// Whether the record is locked against edits by the given user.
    ///
    /// Lock granularity is per-user-once-signed: a personal sign-off
    /// locks that user out even while the meeting as a whole is open,
    /// and full consensus locks everyone out.
    pub fn is_locked_for(&self, user: UserId) -> bool {
        self.is_finalized() || self.has_finalized(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting_with(attendees: Vec<UserId>, finalized_by: Vec<UserId>) -> Meeting {
        Meeting {
            id: MeetingId::new(),
            title: "Line B Sterilization Audit".to_string(),
            description: String::new(),
            start_time: Utc::now(),
            end_time: Utc::now(),
            location: "Production Hub".to_string(),
            department: Department::Production,
            team: Team::None,
            region: Region::None,
            organizer: attendees.first().copied().unwrap_or_default(),
            leader: attendees.first().copied().unwrap_or_default(),
            attendees,
            finalized_by,
            rejected_by: HashMap::new(),
            minutes: Minutes::default(),
            is_custom_room: false,
            kind: MeetingType::Standard,
            recurrence: Recurrence::None,
            attachments: Vec::new(),
            travel_cities: None,
        }
    }

    #[test]
    fn test_empty_roster_is_never_finalized() {
        let meeting = meeting_with(Vec::new(), Vec::new());
        assert!(!meeting.is_finalized());
    }

    #[test]
    fn test_finalized_requires_every_attendee() {
        let (a, b) = (UserId::new(), UserId::new());
        let partial = meeting_with(vec![a, b], vec![a]);
        assert!(!partial.is_finalized());
        let full = meeting_with(vec![a, b], vec![a, b]);
        assert!(full.is_finalized());
    }

    #[test]
    fn test_personal_signoff_locks_that_user_only() {
        let (a, b) = (UserId::new(), UserId::new());
        let meeting = meeting_with(vec![a, b], vec![a]);
        assert!(meeting.is_locked_for(a));
        assert!(!meeting.is_locked_for(b));
    }

    #[test]
    fn test_full_consensus_locks_everyone() {
        let (a, b) = (UserId::new(), UserId::new());
        let outsider = UserId::new();
        let meeting = meeting_with(vec![a, b], vec![a, b]);
        assert!(meeting.is_locked_for(a));
        assert!(meeting.is_locked_for(outsider));
    }
}
