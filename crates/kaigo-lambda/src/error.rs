use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use kaigo_core::error::ErrorCode;
use kaigo_gemini::GeminiError;

/// Fixed body message for internal failures. The underlying detail is
/// logged, never returned to the caller.
const INTERNAL_MESSAGE: &str = "サーバー内部でエラーが発生しました。";

/// Unified API error type for all route handlers.
///
/// Variants constructed directly by handlers (auth and caller errors) are
/// final; only `GeminiError` goes through the classifier, exactly once, in
/// the `From` impl below.
#[derive(Debug)]
pub enum ApiError {
    Unauthenticated(String),
    InvalidArgument(String),
    Unavailable(String),
    ResourceExhausted(String),
    Internal(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::InvalidArgument(_) => "invalid-argument",
            ApiError::Unavailable(_) => "unavailable",
            ApiError::ResourceExhausted(_) => "resource-exhausted",
            ApiError::Internal(_) => "internal",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match self {
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::ResourceExhausted(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorBody { error: ErrorDetail { code, message } })).into_response()
    }
}

impl From<GeminiError> for ApiError {
    fn from(e: GeminiError) -> Self {
        let classified = kaigo_gemini::classify(&e);
        tracing::error!(
            kind = ?classified.kind,
            code = classified.code.as_str(),
            "model invocation failed: {e}"
        );
        match classified.code {
            ErrorCode::Unavailable => ApiError::Unavailable(classified.message),
            ErrorCode::ResourceExhausted => ApiError::ResourceExhausted(classified.message),
            ErrorCode::Internal => ApiError::Internal(classified.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    use kaigo_gemini::{GeminiError, RETRY_MESSAGE};

    use super::{ApiError, INTERNAL_MESSAGE};

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn internal_body_never_carries_the_underlying_detail() {
        let error: ApiError = GeminiError::EmptyResponse.into();
        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "internal");
        assert_eq!(json["error"]["message"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn schema_violation_detail_stays_out_of_the_body() {
        let error: ApiError =
            GeminiError::SchemaViolation("missing field `needs` at line 1".to_string()).into();
        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = json["error"]["message"].as_str().unwrap();
        assert!(!message.contains("missing field"));
        assert_eq!(message, INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn transient_failure_keeps_the_retry_message() {
        let error: ApiError = GeminiError::Upstream {
            status: Some(429),
            code: Some("RESOURCE_EXHAUSTED".to_string()),
            message: "Quota exceeded".to_string(),
        }
        .into();
        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["code"], "unavailable");
        assert_eq!(json["error"]["message"], RETRY_MESSAGE);
    }
}
