//! Legal status transitions for tasks and their side effects.

use std::sync::Arc;

use tracing::info;

use minutehub_core::error::AppError;
use minutehub_core::types::TaskId;
use minutehub_entity::attachment::Attachment;
use minutehub_entity::audit::AuditAction;
use minutehub_entity::notification::{NotificationKind, NotificationLink};
use minutehub_entity::task::{Task, TaskStatus};
use minutehub_store::repositories::task::TaskRepository;

use crate::audit::AuditRecorder;
use crate::context::RequestContext;
use crate::notification::NotificationRouter;
use crate::permission::{Capability, CapabilityEnforcer};

/// Optional inputs carried by a status transition.
#[derive(Debug, Clone, Default)]
pub struct TransitionDetails {
    /// Reason for declining intake. Mandatory for a rejection.
    pub rejection_reason: Option<String>,
    /// Note supplied with completion.
    pub completion_message: Option<String>,
    /// Evidence supplied with completion.
    pub completion_attachments: Vec<Attachment>,
}

/// Enforces the task lifecycle state machine.
///
/// The engine re-validates every transition independently of the caller
/// — the UI is expected to only offer legal moves, but caller-supplied
/// legality is never trusted. A redundant same-status submission is an
/// illegal transition, so a completion notification can never fire
/// twice for one task.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Notification fan-out.
    notifier: NotificationRouter,
    /// Audit recorder.
    audit: AuditRecorder,
    /// Capability enforcer.
    enforcer: CapabilityEnforcer,
}

impl TaskService {
    /// Creates a new task lifecycle engine.
    pub fn new(
        task_repo: Arc<TaskRepository>,
        notifier: NotificationRouter,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            task_repo,
            notifier,
            audit,
            enforcer: CapabilityEnforcer::new(),
        }
    }

    /// Transition a task to a new status.
    ///
    /// Validates first, applies second: a rejected transition leaves the
    /// store, feeds, and audit log untouched. An absent task id is a
    /// silent no-op returning `None`.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        task_id: TaskId,
        to: TaskStatus,
        details: TransitionDetails,
    ) -> Result<Option<Task>, AppError> {
        let Some(mut task) = self.task_repo.find_by_id(task_id).await? else {
            return Ok(None);
        };
        let from = task.status;

        if !task.is_assigned_to(ctx.user_id) {
            return Err(AppError::invalid_transition(format!(
                "Only the current assignee may move task \"{}\"",
                task.title
            )));
        }
        if !from.can_transition_to(to) {
            return Err(AppError::invalid_transition(format!(
                "Task \"{}\" cannot move from {from} to {to}",
                task.title
            )));
        }

        let rejection_reason = match to {
            TaskStatus::Rejected => {
                let reason = details
                    .rejection_reason
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default();
                if reason.is_empty() {
                    return Err(AppError::validation(
                        "A rejection requires a non-empty reason",
                    ));
                }
                Some(reason.to_string())
            }
            _ => None,
        };

        task.status = to;
        if let Some(reason) = rejection_reason {
            task.rejection_reason = Some(reason);
        }
        if to == TaskStatus::Completed {
            if details.completion_message.is_some() {
                task.completion_message = details.completion_message;
            }
            if !details.completion_attachments.is_empty() {
                task.completion_attachments = details.completion_attachments;
            }
        }
        let task = self.task_repo.update(&task).await?;

        // The transition table already rejected a same-status submission,
        // so each of these fires at most once per status change.
        match to {
            TaskStatus::Approved if from == TaskStatus::PendingApproval => {
                self.notifier
                    .notify(
                        task.assigned_by,
                        NotificationKind::Task,
                        "Task Intake Confirmed",
                        format!(
                            "{} has acknowledged and accepted responsibility for \"{}\".",
                            ctx.name, task.title
                        ),
                        Some(NotificationLink::Tasks),
                        Some(task.id.to_string()),
                    )
                    .await?;
            }
            TaskStatus::Completed => {
                self.notifier
                    .notify(
                        task.assigned_by,
                        NotificationKind::Task,
                        "Task Finalized",
                        format!(
                            "\"{}\" has been marked as COMPLETED by {}.",
                            task.title, ctx.name
                        ),
                        Some(NotificationLink::Tasks),
                        Some(task.id.to_string()),
                    )
                    .await?;
            }
            _ => {}
        }

        let audit_details = match (&task.rejection_reason, to) {
            (Some(reason), TaskStatus::Rejected) => format!(
                "Task \"{}\" moved from {from} to {to} by {}. Reason: {reason}",
                task.title, ctx.name
            ),
            _ => format!(
                "Task \"{}\" moved from {from} to {to} by {}",
                task.title, ctx.name
            ),
        };
        self.audit
            .record(ctx, AuditAction::TaskStatusUpdate, audit_details)
            .await?;

        info!(task_id = %task.id, from = %from, to = %to, "task transitioned");
        Ok(Some(task))
    }

    /// Purge a completed task from the board.
    ///
    /// Deletion is the only legal exit from `Completed`. Purging an
    /// absent id is a silent no-op returning `false`.
    pub async fn purge(&self, ctx: &RequestContext, task_id: TaskId) -> Result<bool, AppError> {
        self.enforcer.require(&ctx.role, Capability::PurgeTask)?;

        let Some(task) = self.task_repo.find_by_id(task_id).await? else {
            return Ok(false);
        };
        if !task.is_purgeable() {
            return Err(AppError::invalid_transition(format!(
                "Task \"{}\" is {} and cannot be purged; only completed tasks may be removed",
                task.title, task.status
            )));
        }

        self.task_repo.delete(task_id).await?;
        self.audit
            .record(
                ctx,
                AuditAction::TaskDeleted,
                format!(
                    "REMOVED FROM BOARD: Completed task \"{}\" was purged from the active manifest.",
                    task.title
                ),
            )
            .await?;

        info!(task_id = %task_id, "completed task purged");
        Ok(true)
    }

    /// Fetch one task.
    pub async fn get(&self, task_id: TaskId) -> Result<Option<Task>, AppError> {
        self.task_repo.find_by_id(task_id).await
    }

    /// The board as visible to the acting user: executives see every
    /// task, everyone else sees tasks they issued or own.
    pub async fn visible_board(&self, ctx: &RequestContext) -> Result<Vec<Task>, AppError> {
        let tasks = self.task_repo.find_all().await?;
        if ctx.is_executive() {
            return Ok(tasks);
        }
        Ok(tasks
            .into_iter()
            .filter(|t| t.assigned_to == ctx.user_id || t.assigned_by == ctx.user_id)
            .collect())
    }
}
