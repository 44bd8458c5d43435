//! HTTP client for the Vertex AI `generateContent` endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::error::GeminiError;
use crate::invoke::{GenerateContentRequest, GenerateContentResponse};

/// Fixed model version. Changing this changes latency and cost, not logic.
pub const MODEL_ID: &str = "gemini-2.0-flash";

/// Fixed processing region (Tokyo). Data stays in-region for compliance.
pub const LOCATION: &str = "asia-northeast1";

/// Bounded timeout for one model call. After this the call is treated as
/// failed and classified, never left hanging.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// A configured Vertex AI client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    project_id: String,
    access_token: String,
}

impl GeminiClient {
    pub fn new(project_id: impl Into<String>, access_token: impl Into<String>) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            project_id: project_id.into(),
            access_token: access_token.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{LOCATION}-aiplatform.googleapis.com/v1/projects/{}/locations/{LOCATION}/publishers/google/models/{MODEL_ID}:generateContent",
            self.project_id
        )
    }

    /// Send one `generateContent` request and decode the envelope.
    pub(crate) async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status.as_u16(), &body));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))
    }
}

/// Google API error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: String,
    status: Option<String>,
}

fn upstream_error(status: u16, body: &str) -> GeminiError {
    match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(parsed) => GeminiError::Upstream {
            status: Some(status),
            code: parsed.error.status,
            message: parsed.error.message,
        },
        Err(_) => GeminiError::Upstream {
            status: Some(status),
            code: None,
            message: format!("HTTP {status}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_parses_google_error_body() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        match upstream_error(429, body) {
            GeminiError::Upstream { status, code, message } => {
                assert_eq!(status, Some(429));
                assert_eq!(code.as_deref(), Some("RESOURCE_EXHAUSTED"));
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn upstream_error_falls_back_on_unparseable_body() {
        match upstream_error(503, "<html>Service Unavailable</html>") {
            GeminiError::Upstream { status, code, message } => {
                assert_eq!(status, Some(503));
                assert!(code.is_none());
                assert_eq!(message, "HTTP 503");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
