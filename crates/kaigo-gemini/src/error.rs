use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Non-2xx answer from the model service, with whatever the error body
    /// carried. `code` is the Google status string (e.g. `RESOURCE_EXHAUSTED`).
    #[error("model invocation failed: {message}")]
    Upstream {
        status: Option<u16>,
        code: Option<String>,
        message: String,
    },

    /// The bounded request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The request never produced an HTTP answer (DNS, TLS, connection
    /// reset). `code` is `ECONNRESET` only for connection-level faults;
    /// DNS and TLS failures carry no code and classify as permanent.
    #[error("transport error: {message}")]
    Transport {
        code: Option<&'static str>,
        message: String,
    },

    /// The model returned no text content.
    #[error("no response from AI")]
    EmptyResponse,

    /// The response envelope was not in the expected form.
    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    /// The model's text did not parse into the declared output shape.
    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeminiError::Timeout
        } else {
            GeminiError::Transport {
                code: e.is_connect().then_some("ECONNRESET"),
                message: e.to_string(),
            }
        }
    }
}
