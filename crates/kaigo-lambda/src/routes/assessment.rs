use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_core::models::extraction::ExtractedAssessment;
use kaigo_gemini::{AUDIO_WEBM_MIME, ExtractionSource};
use kaigo_prompt::{SourceMode, build_extraction_prompt};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractAssessmentRequest {
    pub audio_base64: Option<String>,
    pub text_input: Option<String>,
    pub current_data: AssessmentSnapshot,
    pub is_final: bool,
    pub current_summary: String,
}

/// Extract assessment fields from one pass of recorded audio or typed text.
///
/// Exactly one source is required; when both are present the audio wins.
pub async fn extract(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ExtractedAssessment>, ApiError> {
    let req: ExtractAssessmentRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::InvalidArgument(format!("リクエストの形式が不正です: {e}")))?;

    let (source, mode) = select_source(req.audio_base64, req.text_input)?;

    let prompt =
        build_extraction_prompt(mode, &req.current_data, &req.current_summary, req.is_final);
    let extracted = kaigo_gemini::extract_assessment(&state.gemini, source, &prompt).await?;

    Ok(Json(extracted))
}

/// Pick the extraction source. Audio takes precedence over text when both
/// are present; blank strings count as absent.
fn select_source(
    audio_base64: Option<String>,
    text_input: Option<String>,
) -> Result<(ExtractionSource, SourceMode), ApiError> {
    match (audio_base64, text_input) {
        (Some(audio), _) if !audio.trim().is_empty() => Ok((
            ExtractionSource::Audio {
                base64: audio,
                mime_type: AUDIO_WEBM_MIME.to_string(),
            },
            SourceMode::Audio,
        )),
        (_, Some(text)) if !text.trim().is_empty() => {
            Ok((ExtractionSource::Text(text), SourceMode::Text))
        }
        _ => Err(ApiError::InvalidArgument(
            "audioBase64 または textInput のいずれかを指定してください。".to_string(),
        )),
    }
}
