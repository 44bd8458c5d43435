use kaigo_gemini::GeminiClient;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}
