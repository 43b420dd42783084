//! Task lifecycle engine integration tests.

mod common;

use common::{due_date, TestApp};

use minutehub_core::error::ErrorKind;
use minutehub_core::types::TaskId;
use minutehub_entity::audit::AuditAction;
use minutehub_entity::task::TaskStatus;
use minutehub_entity::user::{Department, Role};
use minutehub_service::directive::IssueTaskRequest;
use minutehub_service::task::TransitionDetails;
use minutehub_service::RequestContext;

async fn issue_task(app: &TestApp, issuer: &RequestContext, assignee: minutehub_core::types::UserId) -> minutehub_entity::task::Task {
    app.directives
        .issue_standalone(
            issuer,
            IssueTaskRequest {
                title: "Line B Maintenance Audit".to_string(),
                description: "Check all sensors and valves on Line B.".to_string(),
                assigned_to: assignee,
                due_date: due_date(),
                priority: None,
                recurrence: None,
                attachments: Vec::new(),
            },
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn rejection_requires_a_non_empty_reason() {
    let app = TestApp::new();
    let (_, hod) = app.seed_user("Production Lead", Role::Hod, Department::Production).await;
    let (junior, junior_ctx) = app
        .seed_user("Eli Whitney", Role::Junior, Department::Production)
        .await;
    let task = issue_task(&app, &hod, junior.id).await;

    let err = app
        .tasks
        .update_status(
            &junior_ctx,
            task.id,
            TaskStatus::Rejected,
            TransitionDetails::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // A blank reason does not count either.
    let err = app
        .tasks
        .update_status(
            &junior_ctx,
            task.id,
            TaskStatus::Rejected,
            TransitionDetails {
                rejection_reason: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // The failed attempts changed nothing.
    let unchanged = app.tasks.get(task.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, TaskStatus::PendingApproval);
    assert!(unchanged.rejection_reason.is_none());
}

#[tokio::test]
async fn rejection_persists_reason_and_audits_once() {
    let app = TestApp::new();
    let (_, hod) = app.seed_user("Finance Lead", Role::Hod, Department::Finance).await;
    let (junior, junior_ctx) = app
        .seed_user("Bob Myers", Role::Junior, Department::Finance)
        .await;
    let task = issue_task(&app, &hod, junior.id).await;
    let audit_before = app.audit.count().await.unwrap();

    let rejected = app
        .tasks
        .update_status(
            &junior_ctx,
            task.id,
            TaskStatus::Rejected,
            TransitionDetails {
                rejection_reason: Some("no budget".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(rejected.status, TaskStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("no budget"));

    let entries = app.store.audit_logs.find_all().await.unwrap();
    assert_eq!(entries.len() as u64, audit_before + 1);
    let entry = entries.last().unwrap();
    assert_eq!(entry.action, AuditAction::TaskStatusUpdate);
    assert!(entry.details.contains("no budget"));
}

#[tokio::test]
async fn only_the_assignee_may_transition() {
    let app = TestApp::new();
    let (_, hod) = app.seed_user("QA Lead", Role::Hod, Department::QualityAssurance).await;
    let (junior, _) = app
        .seed_user("QA Junior A", Role::Junior, Department::QualityAssurance)
        .await;
    let (_, other_ctx) = app
        .seed_user("QA Junior B", Role::Junior, Department::QualityAssurance)
        .await;
    let task = issue_task(&app, &hod, junior.id).await;

    let err = app
        .tasks
        .update_status(
            &other_ctx,
            task.id,
            TaskStatus::Approved,
            TransitionDetails::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);
    // The issuer is not the assignee either.
    let err = app
        .tasks
        .update_status(&hod, task.id, TaskStatus::Approved, TransitionDetails::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);
}

#[tokio::test]
async fn completed_admits_nothing_but_deletion() {
    let app = TestApp::new();
    let (_, md) = app.seed_user("Muhammad Naeem", Role::Md, Department::Executive).await;
    let (junior, junior_ctx) = app
        .seed_user("Zaid Khan", Role::Senior, Department::Sales)
        .await;
    let task = issue_task(&app, &md, junior.id).await;

    for to in [TaskStatus::Approved, TaskStatus::InProgress, TaskStatus::Completed] {
        app.tasks
            .update_status(&junior_ctx, task.id, to, TransitionDetails::default())
            .await
            .unwrap();
    }

    for to in [
        TaskStatus::PendingApproval,
        TaskStatus::Approved,
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Rejected,
    ] {
        let err = app
            .tasks
            .update_status(&junior_ctx, task.id, to, TransitionDetails::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);
    }

    assert!(app.tasks.purge(&junior_ctx, task.id).await.unwrap());
    assert!(app.tasks.get(task.id).await.unwrap().is_none());
}

#[tokio::test]
async fn completion_notifies_the_issuer_exactly_once() {
    let app = TestApp::new();
    let (_, md) = app.seed_user("Muhammad Naeem", Role::Md, Department::Executive).await;
    let (junior, junior_ctx) = app
        .seed_user("Eli Whitney", Role::Junior, Department::Production)
        .await;
    let task = issue_task(&app, &md, junior.id).await;

    app.tasks
        .update_status(&junior_ctx, task.id, TaskStatus::Approved, TransitionDetails::default())
        .await
        .unwrap();
    app.tasks
        .update_status(&junior_ctx, task.id, TaskStatus::InProgress, TransitionDetails::default())
        .await
        .unwrap();
    app.tasks
        .update_status(
            &junior_ctx,
            task.id,
            TaskStatus::Completed,
            TransitionDetails {
                completion_message: Some("Deep-clean protocol verified.".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // A redundant completion submission is rejected, so the
    // notification cannot fire twice.
    let err = app
        .tasks
        .update_status(&junior_ctx, task.id, TaskStatus::Completed, TransitionDetails::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);

    let feed = app.notifier.feed(&md).await.unwrap();
    let finalized: Vec<_> = feed
        .iter()
        .filter(|n| n.title == "Task Finalized")
        .collect();
    assert_eq!(finalized.len(), 1);
    assert!(finalized[0].message.contains("Eli Whitney"));

    let stored = app.tasks.get(task.id).await.unwrap().unwrap();
    assert_eq!(
        stored.completion_message.as_deref(),
        Some("Deep-clean protocol verified.")
    );
}

#[tokio::test]
async fn intake_acknowledgment_notifies_the_issuer() {
    let app = TestApp::new();
    let (_, hod) = app.seed_user("Sales Lead", Role::Hod, Department::Sales).await;
    let (junior, junior_ctx) = app
        .seed_user("Sales Junior A", Role::Junior, Department::Sales)
        .await;
    let task = issue_task(&app, &hod, junior.id).await;

    app.tasks
        .update_status(&junior_ctx, task.id, TaskStatus::Approved, TransitionDetails::default())
        .await
        .unwrap();

    let feed = app.notifier.feed(&hod).await.unwrap();
    assert!(feed.iter().any(|n| n.title == "Task Intake Confirmed"
        && n.message.contains("Sales Junior A")));
}

#[tokio::test]
async fn hold_is_reversible_from_both_active_states() {
    let app = TestApp::new();
    let (_, hod) = app.seed_user("IT Lead", Role::Hod, Department::It).await;
    let (junior, junior_ctx) = app
        .seed_user("IT Junior A", Role::Junior, Department::It)
        .await;
    let task = issue_task(&app, &hod, junior.id).await;

    for to in [
        TaskStatus::Approved,
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Pending,
        TaskStatus::Approved,
        TaskStatus::InProgress,
    ] {
        let updated = app
            .tasks
            .update_status(&junior_ctx, task.id, to, TransitionDetails::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, to);
    }
}

#[tokio::test]
async fn purging_an_open_task_is_rejected() {
    let app = TestApp::new();
    let (_, hod) = app.seed_user("QC Lead", Role::Hod, Department::QualityControl).await;
    let (junior, junior_ctx) = app
        .seed_user("QC Junior A", Role::Junior, Department::QualityControl)
        .await;
    let task = issue_task(&app, &hod, junior.id).await;

    let err = app.tasks.purge(&junior_ctx, task.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);
    assert!(app.tasks.get(task.id).await.unwrap().is_some());
}

#[tokio::test]
async fn absent_ids_are_silent_no_ops() {
    let app = TestApp::new();
    let (_, ctx) = app.seed_user("Export Lead", Role::Hod, Department::Export).await;
    let audit_before = app.audit.count().await.unwrap();

    let missing = TaskId::new();
    let result = app
        .tasks
        .update_status(&ctx, missing, TaskStatus::Approved, TransitionDetails::default())
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(!app.tasks.purge(&ctx, missing).await.unwrap());

    // No-ops leave the audit trail untouched.
    assert_eq!(app.audit.count().await.unwrap(), audit_before);
}

#[tokio::test]
async fn executives_see_the_whole_board() {
    let app = TestApp::new();
    let (_, md) = app.seed_user("Muhammad Naeem", Role::Md, Department::Executive).await;
    let (_, hod) = app.seed_user("R&D Lead", Role::Hod, Department::ResearchDevelopment).await;
    let (junior, junior_ctx) = app
        .seed_user("R&D Junior A", Role::Junior, Department::ResearchDevelopment)
        .await;
    let (outsider, outsider_ctx) = app
        .seed_user("Marketing Junior A", Role::Junior, Department::Marketing)
        .await;
    issue_task(&app, &hod, junior.id).await;
    issue_task(&app, &md, outsider.id).await;

    assert_eq!(app.tasks.visible_board(&md).await.unwrap().len(), 2);
    assert_eq!(app.tasks.visible_board(&junior_ctx).await.unwrap().len(), 1);
    assert_eq!(app.tasks.visible_board(&outsider_ctx).await.unwrap().len(), 1);
}
