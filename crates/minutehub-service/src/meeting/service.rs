//! Scheduling, editing, and multi-party finalization of meetings.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use minutehub_core::error::AppError;
use minutehub_core::types::{MeetingId, UserId};
use minutehub_entity::attachment::Attachment;
use minutehub_entity::audit::AuditAction;
use minutehub_entity::meeting::{Meeting, MeetingType, Minutes};
use minutehub_entity::recurrence::Recurrence;
use minutehub_entity::user::{Department, Region, Team};
use minutehub_intelligence::Intelligence;
use minutehub_store::repositories::meeting::MeetingRepository;

use crate::audit::AuditRecorder;
use crate::context::RequestContext;
use crate::permission::{Capability, CapabilityEnforcer};

/// Request to schedule a new meeting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleMeetingRequest {
    /// Session title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// What the session is about.
    #[serde(default)]
    pub description: String,
    /// When the session starts.
    pub start_time: DateTime<Utc>,
    /// When the session ends.
    pub end_time: DateTime<Utc>,
    /// Room or venue.
    #[serde(default)]
    pub location: String,
    /// Hosting department.
    pub department: Department,
    /// Hosting team, if any.
    #[serde(default)]
    pub team: Team,
    /// Hosting region, if any.
    #[serde(default)]
    pub region: Region,
    /// The designated meeting leader. Defaults to the organizer.
    #[serde(default)]
    pub leader: Option<UserId>,
    /// Users expected in the session.
    #[serde(default)]
    pub attendees: Vec<UserId>,
    /// Minutes recorded up front, if any.
    #[serde(default)]
    pub minutes: Option<Minutes>,
    /// Whether the location is a custom room.
    #[serde(default)]
    pub is_custom_room: bool,
    /// Kind of session.
    #[serde(default)]
    pub kind: MeetingType,
    /// Repetition schedule.
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Attached documents.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Cities visited, for travel sessions.
    #[serde(default)]
    pub travel_cities: Option<String>,
}

/// Partial edit of a still-open meeting. Absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMeetingRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New start time.
    pub start_time: Option<DateTime<Utc>>,
    /// New end time.
    pub end_time: Option<DateTime<Utc>>,
    /// New location.
    pub location: Option<String>,
    /// New attendee roster.
    pub attendees: Option<Vec<UserId>>,
    /// New meeting leader.
    pub leader: Option<UserId>,
    /// Replacement minutes.
    pub minutes: Option<Minutes>,
    /// Replacement attachments.
    pub attachments: Option<Vec<Attachment>>,
    /// New travel cities.
    pub travel_cities: Option<String>,
}

/// Tracks per-attendee sign-off and locks the record once consensus is
/// reached.
///
/// Lock granularity is per-user-once-signed: a personal sign-off locks
/// that attendee out of further edits even while the meeting as a whole
/// is still open, and full consensus locks the record for everyone.
#[derive(Debug, Clone)]
pub struct MeetingService {
    /// Meeting repository.
    meeting_repo: Arc<MeetingRepository>,
    /// Audit recorder.
    audit: AuditRecorder,
    /// Capability enforcer.
    enforcer: CapabilityEnforcer,
}

impl MeetingService {
    /// Creates a new meeting finalization engine.
    pub fn new(meeting_repo: Arc<MeetingRepository>, audit: AuditRecorder) -> Self {
        Self {
            meeting_repo,
            audit,
            enforcer: CapabilityEnforcer::new(),
        }
    }

    /// Schedule a new meeting. The acting user becomes the organizer.
    pub async fn schedule(
        &self,
        ctx: &RequestContext,
        request: ScheduleMeetingRequest,
    ) -> Result<Meeting, AppError> {
        self.enforcer
            .require(&ctx.role, Capability::ScheduleMeeting)?;
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let meeting = Meeting {
            id: MeetingId::new(),
            title: request.title,
            description: request.description,
            start_time: request.start_time,
            end_time: request.end_time,
            location: request.location,
            department: request.department,
            team: request.team,
            region: request.region,
            organizer: ctx.user_id,
            leader: request.leader.unwrap_or(ctx.user_id),
            attendees: request.attendees,
            finalized_by: Vec::new(),
            rejected_by: HashMap::new(),
            minutes: request.minutes.unwrap_or_default(),
            is_custom_room: request.is_custom_room,
            kind: request.kind,
            recurrence: request.recurrence,
            attachments: request.attachments,
            travel_cities: request.travel_cities,
        };
        let meeting = self.meeting_repo.create(meeting).await?;

        self.audit
            .record(
                ctx,
                AuditAction::MeetingScheduled,
                format!("Scheduled: \"{}\"", meeting.title),
            )
            .await?;

        info!(meeting_id = %meeting.id, "meeting scheduled");
        Ok(meeting)
    }

    /// Edit a still-open meeting.
    ///
    /// Rejected once the acting user has personally signed off or the
    /// record is fully finalized. An absent id is a silent no-op
    /// returning `None`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        meeting_id: MeetingId,
        request: UpdateMeetingRequest,
    ) -> Result<Option<Meeting>, AppError> {
        let Some(mut meeting) = self.meeting_repo.find_by_id(meeting_id).await? else {
            return Ok(None);
        };
        self.ensure_unlocked(&meeting, ctx.user_id)?;

        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Title is required"));
            }
            meeting.title = title;
        }
        if let Some(description) = request.description {
            meeting.description = description;
        }
        if let Some(start_time) = request.start_time {
            meeting.start_time = start_time;
        }
        if let Some(end_time) = request.end_time {
            meeting.end_time = end_time;
        }
        if let Some(location) = request.location {
            meeting.location = location;
        }
        if let Some(attendees) = request.attendees {
            meeting.attendees = attendees;
        }
        if let Some(leader) = request.leader {
            meeting.leader = leader;
        }
        if let Some(minutes) = request.minutes {
            meeting.minutes = minutes;
        }
        if let Some(attachments) = request.attachments {
            meeting.attachments = attachments;
        }
        if let Some(travel_cities) = request.travel_cities {
            meeting.travel_cities = Some(travel_cities);
        }
        let meeting = self.meeting_repo.update(&meeting).await?;

        self.audit
            .record(
                ctx,
                AuditAction::MeetingUpdated,
                format!("Updated: \"{}\"", meeting.title),
            )
            .await?;

        Ok(Some(meeting))
    }

    /// Record the acting user's sign-off on the minutes.
    ///
    /// The actor must be an attendee. A repeated sign-off is an
    /// idempotent no-op (any carried minutes are ignored). The moment
    /// the roster reaches full consensus, the record is locked and one
    /// audit entry is emitted — exactly once. An absent id is a silent
    /// no-op returning `None`.
    pub async fn finalize(
        &self,
        ctx: &RequestContext,
        meeting_id: MeetingId,
        final_minutes: Option<Minutes>,
    ) -> Result<Option<Meeting>, AppError> {
        let Some(mut meeting) = self.meeting_repo.find_by_id(meeting_id).await? else {
            return Ok(None);
        };
        if !meeting.is_attendee(ctx.user_id) {
            return Err(AppError::invalid_transition(format!(
                "Only attendees may sign off on \"{}\"",
                meeting.title
            )));
        }
        if meeting.has_finalized(ctx.user_id) {
            return Ok(Some(meeting));
        }

        // The signer may carry their last edits into the sign-off; they
        // are not locked until the signature lands.
        if let Some(minutes) = final_minutes {
            meeting.minutes = minutes;
        }
        meeting.finalized_by.push(ctx.user_id);
        let newly_finalized = meeting.is_finalized();
        let meeting = self.meeting_repo.update(&meeting).await?;

        if newly_finalized {
            self.audit
                .record(
                    ctx,
                    AuditAction::MeetingFinalized,
                    format!("OFFICIAL RECORD LOCKED: \"{}\"", meeting.title),
                )
                .await?;
            info!(meeting_id = %meeting.id, "meeting record locked");
        }

        Ok(Some(meeting))
    }

    /// Fetch one meeting.
    pub async fn get(&self, meeting_id: MeetingId) -> Result<Option<Meeting>, AppError> {
        self.meeting_repo.find_by_id(meeting_id).await
    }

    /// Meetings the acting user attends.
    pub async fn my_calendar(&self, ctx: &RequestContext) -> Result<Vec<Meeting>, AppError> {
        self.meeting_repo.find_by_attendee(ctx.user_id).await
    }

    /// The department calendar as visible to the acting user:
    /// executives may browse any department (or all of them), everyone
    /// else is locked to their own.
    pub async fn department_calendar(
        &self,
        ctx: &RequestContext,
        filter: Option<Department>,
    ) -> Result<Vec<Meeting>, AppError> {
        if ctx.is_executive() {
            return match filter {
                Some(department) => self.meeting_repo.find_by_department(department).await,
                None => self.meeting_repo.find_all().await,
            };
        }
        self.meeting_repo.find_by_department(ctx.department).await
    }

    /// Run the draft minutes through the external summarizer.
    ///
    /// Fails soft: on any service error the draft is returned unchanged
    /// so the affordance stays re-invokable.
    pub async fn summarize_draft(
        &self,
        intelligence: &dyn Intelligence,
        draft: &Minutes,
    ) -> Minutes {
        if draft.is_empty() {
            return draft.clone();
        }
        match intelligence.summarize(&draft.to_plain_text()).await {
            Ok(summary) => Minutes::FreeText(summary),
            Err(e) => {
                warn!(error = %e, "summarization failed; keeping draft minutes");
                draft.clone()
            }
        }
    }

    fn ensure_unlocked(&self, meeting: &Meeting, user: UserId) -> Result<(), AppError> {
        if meeting.is_finalized() {
            return Err(AppError::invalid_transition(format!(
                "\"{}\" is an official locked record and can no longer be edited",
                meeting.title
            )));
        }
        if meeting.has_finalized(user) {
            return Err(AppError::invalid_transition(format!(
                "You have signed off on \"{}\" and can no longer edit it",
                meeting.title
            )));
        }
        Ok(())
    }
}
