//! Audit trail CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use minutehub_core::error::AppError;
use minutehub_core::types::pagination::PageRequest;
use minutehub_core::types::UserId;
use minutehub_entity::audit::AuditAction;
use minutehub_store::repositories::audit::AuditSearch;

/// Arguments for audit commands
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Audit subcommand
    #[command(subcommand)]
    pub command: AuditCommand,
}

/// Audit subcommands
#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// Search the audit trail
    Search {
        /// Filter by action kind, e.g. "Task Status Update"
        #[arg(short, long)]
        action: Option<String>,
        /// Filter by actor (user ID)
        #[arg(long)]
        actor: Option<String>,
        /// Filter by a details substring
        #[arg(short, long)]
        contains: Option<String>,
        /// Page number (newest first)
        #[arg(short, long, default_value = "1")]
        page: u64,
        /// Number of results per page
        #[arg(short, long, default_value = "50")]
        limit: u64,
    },
    /// Export the audit trail to a JSON file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "audit_export.json")]
        output: String,
        /// Days of history to export
        #[arg(short, long, default_value = "30")]
        days: i64,
    },
}

/// Audit display row
#[derive(Debug, Serialize, Tabled)]
struct AuditRow {
    /// Time
    time: String,
    /// Actor ID
    actor: String,
    /// Action
    action: String,
    /// Details
    details: String,
}

/// Execute audit commands
pub async fn execute(
    args: &AuditArgs,
    snapshot_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::load_store(snapshot_path).await?;

    match &args.command {
        AuditCommand::Search {
            action,
            actor,
            contains,
            page,
            limit,
        } => {
            let actor_id = actor
                .as_ref()
                .map(|a| {
                    a.parse::<UserId>()
                        .map_err(|e| AppError::validation(format!("Invalid user ID: {e}")))
                })
                .transpose()?;
            let action_kind = action
                .as_ref()
                .map(|a| a.parse::<AuditAction>())
                .transpose()?;

            let filters = AuditSearch {
                actor: actor_id,
                action: action_kind,
                department: None,
                details_contains: contains.clone(),
            };
            let response = store
                .audit_logs
                .search_page(&filters, &PageRequest::new(*page, *limit))
                .await?;

            let rows: Vec<AuditRow> = response
                .items
                .iter()
                .map(|e| AuditRow {
                    time: e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    actor: e.actor.to_string()[..8].to_string(),
                    action: e.action.to_string(),
                    details: e.details.clone(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        AuditCommand::Export {
            output: out_path,
            days,
        } => {
            let since = chrono::Utc::now() - chrono::Duration::days(*days);
            let entries = store.audit_logs.find_since(since).await?;

            let json = serde_json::to_string_pretty(&entries)?;
            tokio::fs::write(out_path, json)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write file: {e}")))?;

            output::print_success(&format!(
                "Exported {} audit entries to '{}'",
                entries.len(),
                out_path
            ));
        }
    }

    Ok(())
}
