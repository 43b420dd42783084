//! Structured payloads returned by the external AI service.

use serde::{Deserialize, Serialize};

/// One actionable directive extracted from minutes text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedTask {
    /// High-level professional title.
    pub title: String,
    /// Technical scope of the work.
    #[serde(default)]
    pub description: String,
    /// The `@Name` ownership tag, without the `@`. Unmatched names are
    /// filtered out downstream, so this stays a raw string here.
    #[serde(default, rename = "taggedName")]
    pub tagged_name: Option<String>,
    /// Suggested priority quadrant: `"Q1"`, `"Q2"`, or `"Q3"`.
    #[serde(default)]
    pub priority: Option<String>,
}

/// A KPI appraisal produced by the external service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiAppraisal {
    /// Score from 0 to 10.
    pub score: f32,
    /// Narrative justification for the score.
    pub justification: String,
}
