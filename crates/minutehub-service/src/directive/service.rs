//! Creating tasks — standalone or as a byproduct of saving a meeting.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::Validate;

use minutehub_core::error::AppError;
use minutehub_core::types::{TaskId, UserId};
use minutehub_entity::attachment::Attachment;
use minutehub_entity::audit::AuditAction;
use minutehub_entity::meeting::{Meeting, Minutes};
use minutehub_entity::notification::{NotificationKind, NotificationLink};
use minutehub_entity::recurrence::Recurrence;
use minutehub_entity::task::{Task, TaskPriority, TaskStatus};
use minutehub_intelligence::{ExtractedTask, Intelligence};
use minutehub_store::repositories::task::TaskRepository;
use minutehub_store::repositories::user::UserRepository;

use crate::audit::AuditRecorder;
use crate::context::RequestContext;
use crate::notification::NotificationRouter;
use crate::permission::{Capability, CapabilityEnforcer};

/// Request to issue a standalone task to a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueTaskRequest {
    /// Short title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Detailed description of the work.
    #[serde(default)]
    pub description: String,
    /// The user responsible for the task.
    pub assigned_to: UserId,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Priority quadrant. Defaults to Q2.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Repetition schedule. Defaults to none.
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    /// Attachments supplied by the issuer.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// A proposed task row carried by a meeting save.
///
/// A proposal without a resolvable assignee is silently dropped from the
/// batch — unmatched AI-suggested owners are filtered out before
/// persistence rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskProposal {
    /// Short title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Detailed description of the work.
    #[serde(default)]
    pub description: String,
    /// The resolved assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Priority quadrant. Defaults to Q2.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Repetition schedule. Defaults to none.
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

/// Creates tasks with the directive-issuance contract: every task starts
/// awaiting intake, notifies its assignee, and is recorded in the audit
/// trail.
#[derive(Debug, Clone)]
pub struct DirectiveService {
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Personnel directory, for assignee resolution.
    user_repo: Arc<UserRepository>,
    /// Notification fan-out.
    notifier: NotificationRouter,
    /// Audit recorder.
    audit: AuditRecorder,
    /// Capability enforcer.
    enforcer: CapabilityEnforcer,
}

impl DirectiveService {
    /// Creates a new directive issuance engine.
    pub fn new(
        task_repo: Arc<TaskRepository>,
        user_repo: Arc<UserRepository>,
        notifier: NotificationRouter,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            task_repo,
            user_repo,
            notifier,
            audit,
            enforcer: CapabilityEnforcer::new(),
        }
    }

    /// Issue a standalone task, outside any meeting.
    pub async fn issue_standalone(
        &self,
        ctx: &RequestContext,
        request: IssueTaskRequest,
    ) -> Result<Task, AppError> {
        self.enforcer
            .require(&ctx.role, Capability::IssueDirective)?;
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let assignee = self
            .user_repo
            .find_by_id(request.assigned_to)
            .await?
            .ok_or_else(|| AppError::not_found("Assignee not found in the directory"))?;

        let task = Task {
            id: TaskId::new(),
            title: request.title,
            description: request.description,
            assigned_to: assignee.id,
            assigned_by: ctx.user_id,
            meeting_id: None,
            due_date: request.due_date,
            status: TaskStatus::PendingApproval,
            priority: request.priority.unwrap_or_default(),
            rejection_reason: None,
            created_at: Utc::now(),
            recurrence: request.recurrence.unwrap_or_default(),
            attachments: request.attachments,
            completion_message: None,
            completion_attachments: Vec::new(),
        };
        let task = self.task_repo.create(task).await?;

        self.notifier
            .notify(
                task.assigned_to,
                NotificationKind::Task,
                "Direct Directive Issued",
                format!(
                    "{} has assigned you a {} task. Explicit intake required.",
                    ctx.name, task.priority
                ),
                Some(NotificationLink::Tasks),
                Some(task.id.to_string()),
            )
            .await?;
        self.audit
            .record(
                ctx,
                AuditAction::TaskAssigned,
                format!("Direct task assigned to {}", assignee.name),
            )
            .await?;

        info!(task_id = %task.id, assignee = %task.assigned_to, "standalone directive issued");
        Ok(task)
    }

    /// Issue the batch of tasks proposed alongside a meeting save.
    ///
    /// Proposals without a resolvable assignee are dropped, the rest are
    /// validated as a whole before any task is created, and one audit
    /// entry covers the batch.
    pub async fn issue_for_meeting(
        &self,
        ctx: &RequestContext,
        meeting: &Meeting,
        proposals: Vec<TaskProposal>,
    ) -> Result<Vec<Task>, AppError> {
        let mut accepted = Vec::new();
        for proposal in proposals {
            let Some(assignee) = proposal.assigned_to else {
                debug!(title = %proposal.title, "dropping proposal with no assignee");
                continue;
            };
            if self.user_repo.find_by_id(assignee).await?.is_none() {
                debug!(title = %proposal.title, "dropping proposal with unknown assignee");
                continue;
            }
            proposal
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;
            accepted.push((assignee, proposal));
        }

        let mut created = Vec::with_capacity(accepted.len());
        for (assignee, proposal) in accepted {
            let task = Task {
                id: TaskId::new(),
                title: proposal.title,
                description: proposal.description,
                assigned_to: assignee,
                assigned_by: ctx.user_id,
                meeting_id: Some(meeting.id),
                due_date: proposal.due_date,
                status: TaskStatus::PendingApproval,
                priority: proposal.priority.unwrap_or_default(),
                rejection_reason: None,
                created_at: Utc::now(),
                recurrence: proposal.recurrence.unwrap_or_default(),
                attachments: Vec::new(),
                completion_message: None,
                completion_attachments: Vec::new(),
            };
            let task = self.task_repo.create(task).await?;

            self.notifier
                .notify(
                    task.assigned_to,
                    NotificationKind::Task,
                    "Directive Received",
                    format!(
                        "New {} task \"{}\" requires your intake acknowledgment.",
                        task.priority, task.title
                    ),
                    Some(NotificationLink::Tasks),
                    Some(task.id.to_string()),
                )
                .await?;
            created.push(task);
        }

        if !created.is_empty() {
            self.audit
                .record(
                    ctx,
                    AuditAction::TaskAssigned,
                    format!(
                        "Issued {} directive(s) from meeting \"{}\"",
                        created.len(),
                        meeting.title
                    ),
                )
                .await?;
        }

        info!(meeting_id = %meeting.id, count = created.len(), "meeting directives issued");
        Ok(created)
    }

    /// Extract directive proposals from minutes via the external
    /// service.
    ///
    /// Fails soft: if the call errors, an empty batch is returned and
    /// the workflow proceeds so the affordance stays re-invokable.
    pub async fn extract_proposals(
        &self,
        intelligence: &dyn Intelligence,
        minutes: &Minutes,
        due_date: NaiveDate,
    ) -> Result<Vec<TaskProposal>, AppError> {
        let extracted = match intelligence.extract_tasks(&minutes.to_plain_text()).await {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(error = %e, "task extraction failed; proceeding with no proposals");
                return Ok(Vec::new());
            }
        };
        self.proposals_from_extraction(&extracted, due_date).await
    }

    /// Turn AI-extracted action items into proposals, resolving `@Name`
    /// ownership tags against the directory. Unmatched names stay
    /// unassigned and are dropped at issuance.
    pub async fn proposals_from_extraction(
        &self,
        extracted: &[ExtractedTask],
        due_date: NaiveDate,
    ) -> Result<Vec<TaskProposal>, AppError> {
        let mut proposals = Vec::with_capacity(extracted.len());
        for item in extracted {
            let assigned_to = match item.tagged_name.as_deref() {
                Some(name) => self.user_repo.find_by_name(name).await?.map(|u| u.id),
                None => None,
            };
            let priority = item
                .priority
                .as_deref()
                .and_then(|p| p.parse::<TaskPriority>().ok());
            proposals.push(TaskProposal {
                title: item.title.clone(),
                description: item.description.clone(),
                assigned_to,
                due_date,
                priority,
                recurrence: None,
            });
        }
        Ok(proposals)
    }
}
