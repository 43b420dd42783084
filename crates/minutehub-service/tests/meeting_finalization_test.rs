//! Meeting finalization engine integration tests.

mod common;

use common::TestApp;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use minutehub_core::error::{AppError, ErrorKind};
use minutehub_core::result::AppResult;
use minutehub_core::types::{MeetingId, UserId};
use minutehub_entity::audit::AuditAction;
use minutehub_entity::meeting::{MeetingType, Minutes};
use minutehub_entity::recurrence::Recurrence;
use minutehub_entity::user::{Department, Region, Role, Team};
use minutehub_intelligence::{ExtractedTask, Intelligence, KpiAppraisal};
use minutehub_service::meeting::{ScheduleMeetingRequest, UpdateMeetingRequest};
use minutehub_service::RequestContext;

fn schedule_request(attendees: Vec<UserId>) -> ScheduleMeetingRequest {
    ScheduleMeetingRequest {
        title: "Line B Sterilization Efficiency Audit".to_string(),
        description: "Technical sync following deviation report.".to_string(),
        start_time: Utc::now(),
        end_time: Utc::now() + Duration::minutes(45),
        location: "Production Hub - Level 2".to_string(),
        department: Department::Production,
        team: Team::None,
        region: Region::None,
        leader: None,
        attendees,
        minutes: Some(Minutes::FreeText("Audit successful.".to_string())),
        is_custom_room: false,
        kind: MeetingType::Standard,
        recurrence: Recurrence::None,
        attachments: Vec::new(),
        travel_cities: None,
    }
}

async fn count_action(app: &TestApp, action: AuditAction) -> usize {
    app.store
        .audit_logs
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|e| e.action == action)
        .count()
}

#[tokio::test]
async fn scheduling_emits_one_audit_entry() {
    let app = TestApp::new();
    let (hod, hod_ctx) = app
        .seed_user("Production Lead", Role::Hod, Department::Production)
        .await;

    let meeting = app
        .meetings
        .schedule(&hod_ctx, schedule_request(vec![hod.id]))
        .await
        .unwrap();

    assert_eq!(meeting.organizer, hod.id);
    assert_eq!(meeting.leader, hod.id);
    assert!(!meeting.is_finalized());
    assert_eq!(count_action(&app, AuditAction::MeetingScheduled).await, 1);
}

#[tokio::test]
async fn consensus_locks_the_record_and_audits_exactly_once() {
    let app = TestApp::new();
    let (a, a_ctx) = app
        .seed_user("Production Lead", Role::Hod, Department::Production)
        .await;
    let (b, b_ctx) = app
        .seed_user("Eli Whitney", Role::Junior, Department::Production)
        .await;
    let meeting = app
        .meetings
        .schedule(&a_ctx, schedule_request(vec![a.id, b.id]))
        .await
        .unwrap();

    // First sign-off: the meeting stays open, but A is personally locked.
    let after_a = app
        .meetings
        .finalize(&a_ctx, meeting.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_a.finalized_by, vec![a.id]);
    assert!(!after_a.is_finalized());
    assert_eq!(count_action(&app, AuditAction::MeetingFinalized).await, 0);

    let err = app
        .meetings
        .update(
            &a_ctx,
            meeting.id,
            UpdateMeetingRequest {
                minutes: Some(Minutes::FreeText("late edit".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);

    // B may still edit until their own sign-off.
    app.meetings
        .update(
            &b_ctx,
            meeting.id,
            UpdateMeetingRequest {
                minutes: Some(Minutes::FreeText("Amended audit notes.".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    // Second sign-off reaches consensus; the lock entry fires once.
    let after_b = app
        .meetings
        .finalize(&b_ctx, meeting.id, None)
        .await
        .unwrap()
        .unwrap();
    assert!(after_b.is_finalized());
    assert_eq!(count_action(&app, AuditAction::MeetingFinalized).await, 1);

    // Re-signing is idempotent and never re-fires the entry.
    let again = app
        .meetings
        .finalize(&a_ctx, meeting.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.finalized_by, vec![a.id, b.id]);
    assert_eq!(count_action(&app, AuditAction::MeetingFinalized).await, 1);

    // Once locked, every edit is rejected for every actor.
    for ctx in [&a_ctx, &b_ctx] {
        let err = app
            .meetings
            .update(
                ctx,
                meeting.id,
                UpdateMeetingRequest {
                    title: Some("Rewritten history".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);
    }
}

#[tokio::test]
async fn non_attendees_cannot_sign_off() {
    let app = TestApp::new();
    let (a, a_ctx) = app
        .seed_user("Regulatory Lead", Role::Hod, Department::Regulatory)
        .await;
    let (_, outsider_ctx) = app
        .seed_user("Finance Junior A", Role::Junior, Department::Finance)
        .await;
    let meeting = app
        .meetings
        .schedule(&a_ctx, schedule_request(vec![a.id]))
        .await
        .unwrap();

    let err = app
        .meetings
        .finalize(&outsider_ctx, meeting.id, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);
}

#[tokio::test]
async fn an_empty_roster_never_finalizes() {
    let app = TestApp::new();
    let (_, ctx) = app
        .seed_user("Marketing Lead", Role::Hod, Department::Marketing)
        .await;
    let meeting = app
        .meetings
        .schedule(&ctx, schedule_request(Vec::new()))
        .await
        .unwrap();
    assert!(!meeting.is_finalized());
}

#[tokio::test]
async fn the_signer_may_carry_final_minutes() {
    let app = TestApp::new();
    let (a, a_ctx) = app
        .seed_user("Export Lead", Role::Hod, Department::Export)
        .await;
    let meeting = app
        .meetings
        .schedule(&a_ctx, schedule_request(vec![a.id]))
        .await
        .unwrap();

    let finalized = app
        .meetings
        .finalize(
            &a_ctx,
            meeting.id,
            Some(Minutes::FreeText("Closing summary.".to_string())),
        )
        .await
        .unwrap()
        .unwrap();
    assert!(finalized.is_finalized());
    assert_eq!(
        finalized.minutes,
        Minutes::FreeText("Closing summary.".to_string())
    );
}

#[tokio::test]
async fn updating_an_open_meeting_audits_the_edit() {
    let app = TestApp::new();
    let (a, a_ctx) = app
        .seed_user("BD Lead", Role::Hod, Department::BusinessDevelopment)
        .await;
    let (b, b_ctx) = app
        .seed_user("BD Junior A", Role::Junior, Department::BusinessDevelopment)
        .await;
    let meeting = app
        .meetings
        .schedule(&a_ctx, schedule_request(vec![a.id, b.id]))
        .await
        .unwrap();

    let updated = app
        .meetings
        .update(
            &b_ctx,
            meeting.id,
            UpdateMeetingRequest {
                title: Some("Partnership Outreach".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Partnership Outreach");
    assert_eq!(count_action(&app, AuditAction::MeetingUpdated).await, 1);
}

#[tokio::test]
async fn updating_an_absent_meeting_is_a_silent_no_op() {
    let app = TestApp::new();
    let (_, ctx) = app
        .seed_user("SC Lead", Role::Hod, Department::SupplyChain)
        .await;
    let audit_before = app.audit.count().await.unwrap();

    let result = app
        .meetings
        .update(&ctx, MeetingId::new(), UpdateMeetingRequest::default())
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(app.audit.count().await.unwrap(), audit_before);
}

/// An intelligence stub whose calls always fail.
struct DownIntelligence;

#[async_trait]
impl Intelligence for DownIntelligence {
    async fn summarize(&self, _raw_notes: &str) -> AppResult<String> {
        Err(AppError::external_service("service unreachable"))
    }

    async fn extract_tasks(&self, _minutes_text: &str) -> AppResult<Vec<ExtractedTask>> {
        Err(AppError::external_service("service unreachable"))
    }

    async fn transcribe_audio(&self, _audio: &str, _mime: &str) -> AppResult<String> {
        Err(AppError::external_service("service unreachable"))
    }

    async fn appraise(
        &self,
        _user: &str,
        _role: &str,
        _kpis: &str,
        _records: &str,
    ) -> AppResult<KpiAppraisal> {
        Err(AppError::external_service("service unreachable"))
    }
}

#[tokio::test]
async fn summarization_fails_soft_and_keeps_the_draft() {
    let app = TestApp::new();
    let draft = Minutes::FreeText("Raw discussion notes.".to_string());
    let result = app.meetings.summarize_draft(&DownIntelligence, &draft).await;
    assert_eq!(result, draft);
}
