//! Login, personnel records, designations, and KPI appraisals.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use minutehub_core::error::AppError;
use minutehub_core::types::UserId;
use minutehub_entity::audit::AuditAction;
use minutehub_entity::user::{Department, User};
use minutehub_intelligence::{Intelligence, KpiAppraisal};
use minutehub_store::repositories::designation::DesignationRepository;
use minutehub_store::repositories::session::SessionRepository;
use minutehub_store::repositories::task::TaskRepository;
use minutehub_store::repositories::user::UserRepository;

use crate::audit::AuditRecorder;
use crate::context::RequestContext;
use crate::permission::{Capability, CapabilityEnforcer};

/// Manages the personnel directory, the local session, the designation
/// list, and AI-scored KPI appraisals.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Personnel directory.
    user_repo: Arc<UserRepository>,
    /// Task board, for appraisal records.
    task_repo: Arc<TaskRepository>,
    /// Designation titles.
    designation_repo: Arc<DesignationRepository>,
    /// Current session.
    session_repo: Arc<SessionRepository>,
    /// Audit recorder.
    audit: AuditRecorder,
    /// Capability enforcer.
    enforcer: CapabilityEnforcer,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        task_repo: Arc<TaskRepository>,
        designation_repo: Arc<DesignationRepository>,
        session_repo: Arc<SessionRepository>,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            designation_repo,
            session_repo,
            audit,
            enforcer: CapabilityEnforcer::new(),
        }
    }

    /// Sign a user in by directory lookup. Not a security boundary.
    pub async fn login(&self, user_id: UserId) -> Result<RequestContext, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found in the directory"))?;

        self.session_repo.sign_in(user.id).await?;
        let ctx = RequestContext::for_user(&user);
        self.audit
            .record(
                &ctx,
                AuditAction::Login,
                format!("Authenticated session for {} ({}).", user.name, user.role),
            )
            .await?;

        info!(user_id = %user.id, "session signed in");
        Ok(ctx)
    }

    /// Sign the current user out.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session_repo.sign_out().await
    }

    /// Rebuild the request context for the signed-in user, if any.
    pub async fn current_context(&self) -> Result<Option<RequestContext>, AppError> {
        let Some(user_id) = self.session_repo.current_user().await? else {
            return Ok(None);
        };
        Ok(self
            .user_repo
            .find_by_id(user_id)
            .await?
            .map(|user| RequestContext::for_user(&user)))
    }

    /// Create or update a personnel record. Chairman capability.
    pub async fn upsert_employee(
        &self,
        ctx: &RequestContext,
        user: User,
    ) -> Result<User, AppError> {
        self.enforcer
            .require(&ctx.role, Capability::ManagePersonnel)?;
        if user.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if user.email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !self.designation_repo.contains(user.role.as_str()).await? {
            return Err(AppError::validation(format!(
                "'{}' is not a registered designation",
                user.role
            )));
        }

        let inserted = self.user_repo.upsert(user.clone()).await?;
        let details = if inserted {
            format!(
                "Chairman added new personnel: {} ({})",
                user.name, user.role
            )
        } else {
            format!("Chairman updated records for {}", user.name)
        };
        self.audit
            .record(ctx, AuditAction::PersonnelUpdate, details)
            .await?;

        Ok(user)
    }

    /// Append a new designation title. Chairman capability.
    ///
    /// A duplicate title is a silent no-op returning `false`.
    pub async fn add_designation(
        &self,
        ctx: &RequestContext,
        title: &str,
    ) -> Result<bool, AppError> {
        self.enforcer
            .require(&ctx.role, Capability::ManageDesignations)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Designation title is required"));
        }

        let appended = self.designation_repo.append_unique(title).await?;
        if appended {
            self.audit
                .record(
                    ctx,
                    AuditAction::DesignationAdded,
                    format!("Chairman created new designation: {title}"),
                )
                .await?;
        }
        Ok(appended)
    }

    /// List every designation title.
    pub async fn designations(&self) -> Result<Vec<String>, AppError> {
        self.designation_repo.find_all().await
    }

    /// Search the directory by name, role, or department substring,
    /// optionally restricted to one department.
    pub async fn directory_search(
        &self,
        department: Option<Department>,
        query: Option<&str>,
    ) -> Result<Vec<User>, AppError> {
        let users = match department {
            Some(department) => self.user_repo.find_by_department(department).await?,
            None => self.user_repo.find_all().await?,
        };
        let Some(query) = query.map(str::to_lowercase) else {
            return Ok(users);
        };
        Ok(users
            .into_iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&query)
                    || u.department.as_str().to_lowercase().contains(&query)
                    || u.role.as_str().to_lowercase().contains(&query)
            })
            .collect())
    }

    /// Score a user's task records against their KPI description via
    /// the external service.
    ///
    /// The error passes through untouched so the caller can distinguish
    /// a failed call from a low score and re-invoke.
    pub async fn appraise(
        &self,
        intelligence: &dyn Intelligence,
        user_id: UserId,
        kpi_description: &str,
    ) -> Result<KpiAppraisal, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found in the directory"))?;

        let records: Vec<_> = self
            .task_repo
            .find_by_assignee(user.id)
            .await?
            .into_iter()
            .map(|t| {
                json!({
                    "title": t.title,
                    "status": t.status,
                    "priority": t.priority,
                    "dueDate": t.due_date,
                })
            })
            .collect();
        let records_json = serde_json::to_string(&records)?;

        intelligence
            .appraise(&user.name, user.role.as_str(), kpi_description, &records_json)
            .await
    }
}
