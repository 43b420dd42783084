//! Snapshot persistence configuration.

use serde::{Deserialize, Serialize};

/// Settings for the JSON snapshot file that backs the entity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the snapshot file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Whether to pretty-print the snapshot JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: default_pretty(),
        }
    }
}

fn default_path() -> String {
    "data/minutehub.json".to_string()
}

fn default_pretty() -> bool {
    true
}
