use kaigo_core::error::{ErrorCode, ErrorKind};
use kaigo_gemini::{GeminiError, RETRY_MESSAGE, classify, classify_shape};

#[test]
fn status_429_is_transient_unavailable() {
    let classified = classify_shape(Some(429), None, None);
    assert_eq!(classified.kind, ErrorKind::Transient);
    assert_eq!(classified.code, ErrorCode::Unavailable);
    assert_eq!(classified.message, RETRY_MESSAGE);
}

#[test]
fn status_503_is_transient_unavailable() {
    let classified = classify_shape(Some(503), None, None);
    assert_eq!(classified.kind, ErrorKind::Transient);
    assert_eq!(classified.code, ErrorCode::Unavailable);
}

#[test]
fn status_404_is_permanent_internal() {
    let classified = classify_shape(Some(404), None, Some("model not found"));
    assert_eq!(classified.kind, ErrorKind::Permanent);
    assert_eq!(classified.code, ErrorCode::Internal);
    assert_eq!(classified.message, "model not found");
}

#[test]
fn transient_code_strings_are_recognized() {
    for code in ["ETIMEDOUT", "ECONNRESET", "RESOURCE_EXHAUSTED"] {
        let classified = classify_shape(None, Some(code), None);
        assert_eq!(classified.kind, ErrorKind::Transient, "code {code}");
        assert_eq!(classified.code, ErrorCode::Unavailable, "code {code}");
    }
}

#[test]
fn resource_exhausted_in_message_is_transient() {
    let classified = classify_shape(None, None, Some("RESOURCE_EXHAUSTED: quota"));
    assert_eq!(classified.kind, ErrorKind::Transient);
    assert_eq!(classified.code, ErrorCode::Unavailable);
}

#[test]
fn status_digits_in_message_are_transient() {
    for message in ["upstream returned 503", "got HTTP 429 from backend"] {
        let classified = classify_shape(None, None, Some(message));
        assert_eq!(classified.kind, ErrorKind::Transient, "message {message}");
    }
}

#[test]
fn empty_shape_is_permanent_with_unknown_error() {
    let classified = classify_shape(None, None, None);
    assert_eq!(classified.kind, ErrorKind::Permanent);
    assert_eq!(classified.code, ErrorCode::Internal);
    assert_eq!(classified.message, "Unknown error");
}

#[test]
fn empty_message_also_yields_unknown_error() {
    let classified = classify_shape(None, None, Some(""));
    assert_eq!(classified.message, "Unknown error");
}

#[test]
fn timeout_error_classifies_as_transient() {
    let classified = classify(&GeminiError::Timeout);
    assert_eq!(classified.kind, ErrorKind::Transient);
    assert_eq!(classified.code, ErrorCode::Unavailable);
    assert_eq!(classified.message, RETRY_MESSAGE);
}

#[test]
fn connection_level_transport_error_classifies_as_transient() {
    let error = GeminiError::Transport {
        code: Some("ECONNRESET"),
        message: "connection reset by peer".to_string(),
    };
    let classified = classify(&error);
    assert_eq!(classified.kind, ErrorKind::Transient);
    assert_eq!(classified.message, RETRY_MESSAGE);
}

#[test]
fn dns_or_tls_transport_error_classifies_as_permanent() {
    for message in ["dns error: failed to lookup address", "invalid peer certificate"] {
        let error = GeminiError::Transport {
            code: None,
            message: message.to_string(),
        };
        let classified = classify(&error);
        assert_eq!(classified.kind, ErrorKind::Permanent, "message {message}");
        assert_eq!(classified.code, ErrorCode::Internal, "message {message}");
        assert_eq!(classified.message, message);
    }
}

#[test]
fn upstream_quota_error_classifies_as_transient() {
    let error = GeminiError::Upstream {
        status: Some(429),
        code: Some("RESOURCE_EXHAUSTED".to_string()),
        message: "Quota exceeded".to_string(),
    };
    let classified = classify(&error);
    assert_eq!(classified.kind, ErrorKind::Transient);
    assert_eq!(classified.message, RETRY_MESSAGE);
}

#[test]
fn schema_violation_classifies_as_permanent() {
    let error = GeminiError::SchemaViolation("missing field `needs`".to_string());
    let classified = classify(&error);
    assert_eq!(classified.kind, ErrorKind::Permanent);
    assert_eq!(classified.code, ErrorCode::Internal);
}

#[test]
fn empty_response_classifies_as_permanent() {
    let classified = classify(&GeminiError::EmptyResponse);
    assert_eq!(classified.kind, ErrorKind::Permanent);
    assert_eq!(classified.message, "no response from AI");
}
