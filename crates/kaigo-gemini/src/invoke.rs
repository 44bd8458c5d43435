//! Model invocation and structured output parsing.
//!
//! Both operations send a schema-constrained `generateContent` request with
//! `responseMimeType: application/json`, then parse the returned text into
//! the declared Rust shape. Schema conformance is requested from the model
//! but never trusted: the typed parse is the defensive check, and a draft is
//! either fully valid or the call fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use kaigo_core::models::care_plan::GeneratedCarePlanDraft;
use kaigo_core::models::extraction::{ExtractedAssessment, MAX_MISSING_INFO_ADVICE};

use crate::client::{GeminiClient, MODEL_ID};
use crate::error::GeminiError;
use crate::schema;

/// Declared MIME type for intake-conversation audio captured by the web UI.
pub const AUDIO_WEBM_MIME: &str = "audio/webm";

/// The raw material for one assessment-extraction pass.
#[derive(Debug, Clone)]
pub enum ExtractionSource {
    /// Base64-encoded audio plus its declared MIME type.
    Audio { base64: String, mime_type: String },
    /// Transcribed or typed conversation text.
    Text(String),
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(parts: Vec<Part>, response_schema: serde_json::Value) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: String, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

// ── Operations ───────────────────────────────────────────────────────────────

/// Generate a structured care-plan draft from an assembled prompt.
pub async fn generate_care_plan(
    client: &GeminiClient,
    prompt: &str,
) -> Result<GeneratedCarePlanDraft, GeminiError> {
    let invocation_id = Uuid::new_v4();
    info!(invocation_id = %invocation_id, model = MODEL_ID, "starting care plan generation");

    let request =
        GenerateContentRequest::new(vec![Part::text(prompt)], schema::care_plan_schema());
    let response = client.generate_content(&request).await?;

    let text = response_text(&response)?;
    let draft: GeneratedCarePlanDraft = parse_payload(&text)?;

    info!(
        invocation_id = %invocation_id,
        needs = draft.needs.len(),
        "care plan generation complete"
    );

    Ok(draft)
}

/// Extract assessment fields from one pass of audio or text.
///
/// The extraction prompt travels as a text part; audio goes alongside it as
/// an `inlineData` part with its declared MIME type.
pub async fn extract_assessment(
    client: &GeminiClient,
    source: ExtractionSource,
    extraction_prompt: &str,
) -> Result<ExtractedAssessment, GeminiError> {
    let invocation_id = Uuid::new_v4();

    let parts = match source {
        ExtractionSource::Audio { base64, mime_type } => {
            info!(invocation_id = %invocation_id, model = MODEL_ID, mime_type = %mime_type, "starting assessment extraction from audio");
            vec![
                Part::text(extraction_prompt),
                Part::inline_data(mime_type, base64),
            ]
        }
        ExtractionSource::Text(text) => {
            info!(invocation_id = %invocation_id, model = MODEL_ID, text_len = text.len(), "starting assessment extraction from text");
            vec![
                Part::text(extraction_prompt),
                Part::text(format!("# 面談内容\n{text}")),
            ]
        }
    };

    let request = GenerateContentRequest::new(parts, schema::assessment_schema());
    let response = client.generate_content(&request).await?;

    let text = response_text(&response)?;
    let mut extracted: ExtractedAssessment = parse_payload(&text)?;
    extracted.missing_info_advice.truncate(MAX_MISSING_INFO_ADVICE);

    info!(
        invocation_id = %invocation_id,
        advice_count = extracted.missing_info_advice.len(),
        "assessment extraction complete"
    );

    Ok(extracted)
}

/// Join the text parts of the first candidate. No text at all means the
/// model gave no answer — an internal failure, not an empty draft.
pub fn response_text(response: &GenerateContentResponse) -> Result<String, GeminiError> {
    let candidate = response.candidates.first().ok_or(GeminiError::EmptyResponse)?;

    let text: String = candidate
        .content
        .as_ref()
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
        Err(GeminiError::EmptyResponse)
    } else {
        Ok(text)
    }
}

/// Parse the model's JSON text into the declared output shape.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, GeminiError> {
    serde_json::from_str(text)
        .map_err(|e| GeminiError::SchemaViolation(format!("failed to parse model output: {e}")))
}
