//! External AI service configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external generative-AI service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// API key for the service.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for summarization, extraction, and transcription.
    #[serde(default = "default_flash_model")]
    pub flash_model: String,
    /// Model used for KPI appraisals.
    #[serde(default = "default_pro_model")]
    pub pro_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            flash_model: default_flash_model(),
            pro_model: default_pro_model(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_flash_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_pro_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_timeout() -> u64 {
    30
}
