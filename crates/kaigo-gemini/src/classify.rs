//! Error classification: transient (retry-worthy) vs permanent.
//!
//! The classifier is a pure function over a few optional fields of the
//! failure — HTTP status, code string, message — never over error type
//! identity. It only produces a recommendation; retry/backoff is the
//! calling layer's responsibility.

use kaigo_core::error::{ClassifiedError, ErrorCode, ErrorKind};

use crate::error::GeminiError;

/// Fixed user-facing message for retry-eligible failures.
pub const RETRY_MESSAGE: &str =
    "AIサービスが混み合っています。しばらく時間をおいてから再度お試しください。";

/// Code strings that indicate a transient fault.
const TRANSIENT_CODES: [&str; 3] = ["ETIMEDOUT", "ECONNRESET", "RESOURCE_EXHAUSTED"];

/// Message fragments that indicate a transient fault.
const TRANSIENT_FRAGMENTS: [&str; 3] = ["RESOURCE_EXHAUSTED", "503", "429"];

/// Classify an invocation failure.
pub fn classify(error: &GeminiError) -> ClassifiedError {
    match error {
        GeminiError::Upstream {
            status,
            code,
            message,
        } => classify_shape(*status, code.as_deref(), Some(message)),
        GeminiError::Timeout => classify_shape(None, Some("ETIMEDOUT"), Some("request timed out")),
        GeminiError::Transport { code, message } => classify_shape(None, *code, Some(message)),
        other => classify_shape(None, None, Some(&other.to_string())),
    }
}

/// Shape-level classification over the probed fields.
///
/// Transient when the status is 429 or 503, the code is one of
/// [`TRANSIENT_CODES`], or the message contains one of
/// [`TRANSIENT_FRAGMENTS`]. Everything else is permanent, with the original
/// message (or "Unknown error") passed through. Never panics.
pub fn classify_shape(
    status: Option<u16>,
    code: Option<&str>,
    message: Option<&str>,
) -> ClassifiedError {
    let transient = matches!(status, Some(429) | Some(503))
        || code.is_some_and(|c| TRANSIENT_CODES.contains(&c))
        || message.is_some_and(|m| TRANSIENT_FRAGMENTS.iter().any(|f| m.contains(f)));

    if transient {
        ClassifiedError {
            kind: ErrorKind::Transient,
            code: ErrorCode::Unavailable,
            message: RETRY_MESSAGE.to_string(),
        }
    } else {
        ClassifiedError {
            kind: ErrorKind::Permanent,
            code: ErrorCode::Internal,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}
