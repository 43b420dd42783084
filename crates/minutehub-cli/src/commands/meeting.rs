//! Meeting calendar CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use minutehub_core::error::AppError;
use minutehub_core::types::MeetingId;
use minutehub_entity::user::Department;

/// Arguments for meeting commands
#[derive(Debug, Args)]
pub struct MeetingArgs {
    /// Meeting subcommand
    #[command(subcommand)]
    pub command: MeetingCommand,
}

/// Meeting subcommands
#[derive(Debug, Subcommand)]
pub enum MeetingCommand {
    /// List meetings on the calendar
    List {
        /// Filter by department, e.g. "Production"
        #[arg(short, long)]
        department: Option<String>,
    },
    /// Show one meeting record in full
    Show {
        /// Meeting ID
        id: String,
    },
}

/// Meeting display row
#[derive(Debug, Serialize, Tabled)]
struct MeetingRow {
    /// Title
    title: String,
    /// Department
    department: String,
    /// Start time
    starts: String,
    /// Attendee count
    attendees: usize,
    /// Sign-off progress
    verified: String,
    /// Locked record
    locked: bool,
}

/// Execute meeting commands
pub async fn execute(
    args: &MeetingArgs,
    snapshot_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::load_store(snapshot_path).await?;

    match &args.command {
        MeetingCommand::List { department } => {
            let department_filter = department
                .as_ref()
                .map(|d| d.parse::<Department>())
                .transpose()?;

            let meetings = match department_filter {
                Some(department) => store.meetings.find_by_department(department).await?,
                None => store.meetings.find_all().await?,
            };

            let rows: Vec<MeetingRow> = meetings
                .iter()
                .map(|m| MeetingRow {
                    title: m.title.clone(),
                    department: m.department.to_string(),
                    starts: m.start_time.format("%Y-%m-%d %H:%M").to_string(),
                    attendees: m.attendees.len(),
                    verified: format!("{} / {}", m.finalized_by.len(), m.attendees.len()),
                    locked: m.is_finalized(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        MeetingCommand::Show { id } => {
            let meeting_id = id
                .parse::<MeetingId>()
                .map_err(|e| AppError::validation(format!("Invalid meeting ID: {e}")))?;
            let meeting = store
                .meetings
                .find_by_id(meeting_id)
                .await?
                .ok_or_else(|| AppError::not_found("Meeting not found"))?;

            output::print_item(&meeting, format);
        }
    }

    Ok(())
}
