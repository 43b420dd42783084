//! Gemini `generateContent` client implementation of [`Intelligence`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use minutehub_core::config::intelligence::IntelligenceConfig;
use minutehub_core::error::AppError;
use minutehub_core::result::AppResult;

use crate::types::{ExtractedTask, KpiAppraisal};
use crate::Intelligence;

/// One part of a request or response content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    /// Plain text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline binary payload (base64).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

/// Inline base64 data with its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    /// Base64-encoded bytes.
    data: String,
    /// MIME type of the bytes.
    mime_type: String,
}

/// A content block of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    /// The parts making up this block.
    parts: Vec<Part>,
}

/// Generation configuration for structured responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    /// Expected response MIME type.
    response_mime_type: String,
    /// JSON schema the response must conform to.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    /// Input content blocks.
    contents: Vec<Content>,
    /// Structured-output configuration, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    /// Candidate completions; the first one is used.
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    /// The completion content.
    content: Option<Content>,
}

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiIntelligence {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Service configuration.
    config: IntelligenceConfig,
}

impl GeminiIntelligence {
    /// Create a client from configuration.
    pub fn new(config: IntelligenceConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::external_service(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self { http, config })
    }

    /// Issue one `generateContent` call and return the first candidate's
    /// concatenated text.
    async fn generate(&self, model: &str, request: &GenerateRequest) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    minutehub_core::error::ErrorKind::ExternalService,
                    format!("AI request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "AI service returned an error");
            return Err(AppError::external_service(format!(
                "AI service returned {status}: {body}"
            )));
        }

        let payload: GenerateResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!("Malformed AI response: {e}"))
        })?;

        let text: String = payload
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::external_service(
                "AI response carried no text candidate",
            ));
        }

        Ok(text)
    }

    fn text_request(prompt: String) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }
}

#[async_trait]
impl Intelligence for GeminiIntelligence {
    async fn summarize(&self, raw_notes: &str) -> AppResult<String> {
        if raw_notes.trim().is_empty() {
            return Ok(raw_notes.to_string());
        }

        let prompt = format!(
            "Synthesize the following pharmaceutical meeting notes into a highly \
             professional and structured \"Minutes of Meeting\" (MoM) report.\n\n\
             The output MUST follow this exact structure:\n\n\
             # MINUTES OF MEETING\n\n\
             ## 1. MEETING OBJECTIVES\n\
             (Concise list of what the session aimed to achieve)\n\n\
             ## 2. KEY DISCUSSIONS & DELIBERATIONS\n\
             (Detailed summary of technical and operational points discussed)\n\n\
             ## 3. DECISIONS & RESOLUTIONS\n\
             (Formal record of all items finalized and approved)\n\n\
             ## 4. ACTION ITEMS & DIRECTIVES\n\
             (Bullet points for each directive. CRITICAL: Maintain all @Name \
             mentions exactly as they appear in the original text.)\n\n\
             Ensure the tone is professional, technical, and suitable for a \
             pharmaceutical corporate environment.\n\n\
             Notes:\n{raw_notes}"
        );

        self.generate(&self.config.flash_model, &Self::text_request(prompt))
            .await
    }

    async fn extract_tasks(&self, minutes_text: &str) -> AppResult<Vec<ExtractedTask>> {
        if minutes_text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let prompt = format!(
            "Examine these meeting minutes and extract a structured list of \
             actionable responsibilities.\n\n\
             CRITICAL INSTRUCTION: Identify ownership tags using the @ symbol \
             (e.g., @Sarah).\n\n\
             For each task, provide:\n\
             1. A high-level professional 'title'.\n\
             2. A 'description' detailing the technical scope.\n\
             3. The 'taggedName' (without the @).\n\
             4. The 'priority' ('Q1', 'Q2', or 'Q3').\n\n\
             Minutes:\n{minutes_text}"
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(json!({
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "description": { "type": "STRING" },
                            "taggedName": { "type": "STRING" },
                            "priority": { "type": "STRING" }
                        },
                        "required": ["title", "description", "priority"]
                    }
                })),
            }),
        };

        let text = self.generate(&self.config.flash_model, &request).await?;
        serde_json::from_str(text.trim()).map_err(|e| {
            AppError::external_service(format!("Malformed task extraction payload: {e}"))
        })
    }

    async fn transcribe_audio(&self, audio_base64: &str, mime_type: &str) -> AppResult<String> {
        if audio_base64.is_empty() {
            return Err(AppError::validation("No audio data supplied"));
        }

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            data: audio_base64.to_string(),
                            mime_type: mime_type.to_string(),
                        }),
                    },
                    Part {
                        text: Some(
                            "Transcribe the audio. The audio may be in English, Urdu, or a \
                             mix. CRITICAL: Extract and present ONLY the important points, \
                             main decisions, and actionable items in a concise English \
                             bulleted list. Do not include conversational filler or \
                             irrelevant data."
                                .to_string(),
                        ),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: None,
        };

        self.generate(&self.config.flash_model, &request).await
    }

    async fn appraise(
        &self,
        user_name: &str,
        role: &str,
        kpi_description: &str,
        records_json: &str,
    ) -> AppResult<KpiAppraisal> {
        let prompt = format!(
            "Act as a senior auditor for Swiss Pharmaceuticals. Conduct an appraisal \
             for {user_name} ({role}) based on records: {records_json} against KPIs: \
             {kpi_description}. Return JSON with score and justification."
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(json!({
                    "type": "OBJECT",
                    "properties": {
                        "score": { "type": "NUMBER" },
                        "justification": { "type": "STRING" }
                    },
                    "required": ["score", "justification"]
                })),
            }),
        };

        let text = self.generate(&self.config.pro_model, &request).await?;
        serde_json::from_str(text.trim())
            .map_err(|e| AppError::external_service(format!("Malformed appraisal payload: {e}")))
    }
}
