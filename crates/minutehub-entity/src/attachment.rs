//! File attachments carried by meetings and tasks.

use serde::{Deserialize, Serialize};

/// An attachment stored inline as base64 data.
///
/// The payload is opaque to the engine; it is captured by the UI and
/// passed through to exports unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name.
    pub name: String,
    /// Base64-encoded file content.
    pub data: String,
    /// MIME type of the content.
    #[serde(rename = "type")]
    pub mime_type: String,
}
