//! # minutehub-intelligence
//!
//! The boundary to the external generative-AI service. Four operations
//! — minutes summarization, action-item extraction, audio
//! transcription, and KPI appraisal — are exposed behind the
//! [`Intelligence`] trait so engines and tests can substitute the
//! concrete client. Every operation is independently failable; a
//! failure surfaces as a typed `ExternalService` error and never leaves
//! stored entities partially updated. Callers fall back to the prior
//! content and stay re-invokable.

pub mod client;
pub mod types;

use async_trait::async_trait;

use minutehub_core::result::AppResult;

pub use client::GeminiIntelligence;
pub use types::{ExtractedTask, KpiAppraisal};

/// The external AI service contract.
#[async_trait]
pub trait Intelligence: Send + Sync {
    /// Synthesize raw meeting notes into a structured minutes report.
    ///
    /// Empty input is returned unchanged without a network call.
    async fn summarize(&self, raw_notes: &str) -> AppResult<String>;

    /// Extract actionable directives from minutes text.
    ///
    /// Ownership tags use the `@Name` convention; the tagged name is
    /// returned verbatim for the caller to resolve. Empty input yields
    /// an empty list without a network call.
    async fn extract_tasks(&self, minutes_text: &str) -> AppResult<Vec<ExtractedTask>>;

    /// Transcribe recorded audio into concise bullet points.
    async fn transcribe_audio(&self, audio_base64: &str, mime_type: &str) -> AppResult<String>;

    /// Score a user's records against their KPI description.
    async fn appraise(
        &self,
        user_name: &str,
        role: &str,
        kpi_description: &str,
        records_json: &str,
    ) -> AppResult<KpiAppraisal>;
}
