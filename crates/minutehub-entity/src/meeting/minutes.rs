//! Meeting minutes: free text or a structured discussion sheet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use minutehub_core::types::UserId;

/// Prefix that identifies a legacy serialized discussion sheet.
const LEGACY_SHEET_PREFIX: &str = "[{\"id\":";

/// One row of a structured discussion sheet.
///
/// Row contents are carried opaquely; the engine never validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinuteRow {
    /// Row identifier assigned by the editor.
    #[serde(default)]
    pub id: String,
    /// What was discussed.
    #[serde(default)]
    pub discussion: String,
    /// What was resolved.
    #[serde(default)]
    pub resolution: String,
    /// The user who owns the follow-up, if matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Deadline for the follow-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// The recorded minutes of a meeting.
///
/// The representation is decided at creation time and carried explicitly:
/// either opaque free text or a structured sequence of discussion rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", content = "content", rename_all = "snake_case")]
pub enum Minutes {
    /// Opaque free-text notes.
    FreeText(String),
    /// Structured discussion rows.
    Structured(Vec<MinuteRow>),
}

impl Minutes {
    /// Whether any content has been recorded.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::FreeText(text) => text.trim().is_empty(),
            Self::Structured(rows) => rows.is_empty(),
        }
    }

    /// Render the minutes as plain text for summarization and export.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::FreeText(text) => text.clone(),
            Self::Structured(rows) => rows
                .iter()
                .map(|row| format!("{} => {}", row.discussion, row.resolution))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Import a legacy single-field minutes blob.
    ///
    /// The legacy store kept both forms in one string field; a serialized
    /// discussion sheet is recognized by its JSON-array-of-objects prefix.
    /// A blob that carries the prefix but fails to parse is kept as free
    /// text rather than rejected.
    pub fn from_legacy_blob(blob: &str) -> Self {
        if blob.trim_start().starts_with(LEGACY_SHEET_PREFIX) {
            if let Ok(rows) = serde_json::from_str::<Vec<MinuteRow>>(blob) {
                return Self::Structured(rows);
            }
        }
        Self::FreeText(blob.to_string())
    }

    /// Export back to the legacy single-field representation.
    pub fn to_legacy_blob(&self) -> String {
        match self {
            Self::FreeText(text) => text.clone(),
            Self::Structured(rows) => serde_json::to_string(rows).unwrap_or_default(),
        }
    }
}

impl Default for Minutes {
    fn default() -> Self {
        Self::FreeText(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_sheet_is_detected() {
        let blob = r#"[{"id":"r1","discussion":"Line B audit","resolution":"Approved"}]"#;
        let minutes = Minutes::from_legacy_blob(blob);
        match minutes {
            Minutes::Structured(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].discussion, "Line B audit");
            }
            Minutes::FreeText(_) => panic!("expected structured sheet"),
        }
    }

    #[test]
    fn test_plain_notes_import_as_free_text() {
        let minutes = Minutes::from_legacy_blob("Session commenced at 10:00 AM.");
        assert_eq!(
            minutes,
            Minutes::FreeText("Session commenced at 10:00 AM.".to_string())
        );
    }

    #[test]
    fn test_malformed_sheet_falls_back_to_free_text() {
        let blob = r#"[{"id": broken"#;
        assert!(matches!(Minutes::from_legacy_blob(blob), Minutes::FreeText(_)));
    }

    #[test]
    fn test_legacy_roundtrip_preserves_rows() {
        let rows = vec![MinuteRow {
            id: "r1".to_string(),
            discussion: "Q4 export target".to_string(),
            resolution: "Expedite registration".to_string(),
            owner_id: None,
            deadline: None,
        }];
        let minutes = Minutes::Structured(rows.clone());
        let reimported = Minutes::from_legacy_blob(&minutes.to_legacy_blob());
        assert_eq!(reimported, Minutes::Structured(rows));
    }
}
