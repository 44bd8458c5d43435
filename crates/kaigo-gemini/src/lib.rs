//! kaigo-gemini
//!
//! Vertex AI Gemini invocation with schema-constrained JSON output, plus the
//! error classifier that decides retryability.

pub mod classify;
pub mod client;
pub mod error;
pub mod invoke;
pub mod schema;

pub use classify::{RETRY_MESSAGE, classify, classify_shape};
pub use client::{GeminiClient, LOCATION, MODEL_ID, REQUEST_TIMEOUT};
pub use error::GeminiError;
pub use invoke::{AUDIO_WEBM_MIME, ExtractionSource, extract_assessment, generate_care_plan};
