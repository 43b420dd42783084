//! Task board CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use minutehub_core::error::AppError;
use minutehub_core::types::{MeetingId, UserId};
use minutehub_entity::task::TaskStatus;

/// Arguments for task commands
#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task subcommand
    #[command(subcommand)]
    pub command: TaskCommand,
}

/// Task subcommands
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// List tasks on the board
    List {
        /// Filter by status, e.g. "Pending Approval"
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by assignee (user ID)
        #[arg(long)]
        assignee: Option<String>,
        /// Filter by originating meeting (meeting ID)
        #[arg(long)]
        meeting: Option<String>,
    },
}

/// Task display row
#[derive(Debug, Serialize, Tabled)]
struct TaskRow {
    /// Title
    title: String,
    /// Status
    status: String,
    /// Priority
    priority: String,
    /// Due date
    due: String,
    /// Assignee ID
    assignee: String,
    /// Meeting provenance
    provenance: String,
}

/// Execute task commands
pub async fn execute(
    args: &TaskArgs,
    snapshot_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::load_store(snapshot_path).await?;

    match &args.command {
        TaskCommand::List {
            status,
            assignee,
            meeting,
        } => {
            let status_filter = status
                .as_ref()
                .map(|s| s.parse::<TaskStatus>())
                .transpose()?;
            let assignee_filter = assignee
                .as_ref()
                .map(|a| {
                    a.parse::<UserId>()
                        .map_err(|e| AppError::validation(format!("Invalid user ID: {e}")))
                })
                .transpose()?;
            let meeting_filter = meeting
                .as_ref()
                .map(|m| {
                    m.parse::<MeetingId>()
                        .map_err(|e| AppError::validation(format!("Invalid meeting ID: {e}")))
                })
                .transpose()?;

            let tasks = match (assignee_filter, meeting_filter) {
                (Some(assignee), _) => store.tasks.find_by_assignee(assignee).await?,
                (None, Some(meeting)) => store.tasks.find_by_meeting(meeting).await?,
                (None, None) => store.tasks.find_all().await?,
            };

            let rows: Vec<TaskRow> = tasks
                .iter()
                .filter(|t| status_filter.is_none_or(|s| t.status == s))
                .filter(|t| meeting_filter.is_none_or(|m| t.meeting_id == Some(m)))
                .map(|t| TaskRow {
                    title: t.title.clone(),
                    status: t.status.to_string(),
                    priority: t.priority.to_string(),
                    due: t.due_date.to_string(),
                    assignee: t.assigned_to.to_string()[..8].to_string(),
                    provenance: t
                        .meeting_id
                        .map(|m| m.to_string()[..8].to_string())
                        .unwrap_or_else(|| "direct".to_string()),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
