use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Whether a failure is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ErrorKind {
    /// Retry-eligible upstream failure (rate limit, timeout, brief outage).
    Transient,
    /// Terminal failure; retrying will not help.
    Permanent,
}

/// Error code surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ErrorCode {
    Unavailable,
    Internal,
    ResourceExhausted,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unavailable => "unavailable",
            ErrorCode::Internal => "internal",
            ErrorCode::ResourceExhausted => "resource-exhausted",
        }
    }
}

/// An invocation failure after classification: retryability, caller-facing
/// code, and a user-facing message. Derived per failure, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub message: String,
}
