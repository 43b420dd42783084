//! CLI command definitions and dispatch.

pub mod audit;
pub mod meeting;
pub mod task;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use minutehub_core::config::AppConfig;
use minutehub_core::error::AppError;
use minutehub_store::{snapshot, Store};

/// MinuteHub — Enterprise Meeting & Task Management
#[derive(Debug, Parser)]
#[command(name = "minutehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to the snapshot file. Defaults to the configured path.
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "local")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit trail
    Audit(audit::AuditArgs),
    /// Task board
    Task(task::TaskArgs),
    /// Meeting calendar
    Meeting(meeting::MeetingArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let snapshot_path = self.resolve_snapshot_path()?;
        match &self.command {
            Commands::Audit(args) => audit::execute(args, &snapshot_path, self.format).await,
            Commands::Task(args) => task::execute(args, &snapshot_path, self.format).await,
            Commands::Meeting(args) => meeting::execute(args, &snapshot_path, self.format).await,
        }
    }

    /// An explicit `--snapshot` wins; otherwise the configured path.
    fn resolve_snapshot_path(&self) -> Result<String, AppError> {
        if let Some(path) = &self.snapshot {
            return Ok(path.clone());
        }
        let config = AppConfig::load(&self.env)?;
        Ok(config.snapshot.path)
    }
}

/// Helper: load the store from a snapshot file
pub async fn load_store(snapshot_path: &str) -> Result<Store, AppError> {
    let snapshot = snapshot::read_snapshot(snapshot_path).await?;
    let store = Store::new();
    store.restore(snapshot).await?;
    Ok(store)
}
