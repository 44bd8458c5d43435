use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use kaigo_gemini::GeminiClient;
use state::AppState;

fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/care-plan/generate", post(routes::care_plan::generate))
        .route("/assessment/extract", post(routes::assessment::extract))
        .layer(axum_mw::from_fn(middleware::auth::require_auth));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let project_id = env::var("GOOGLE_PROJECT_ID").unwrap_or_else(|_| "kaigo".to_string());
    let access_token = env::var("GOOGLE_ACCESS_TOKEN").unwrap_or_default();

    let gemini = GeminiClient::new(project_id, access_token)?;

    let app = build_app(AppState { gemini });

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}

#[cfg(test)]
mod test_support {
    use axum::Router;

    use kaigo_gemini::GeminiClient;

    use crate::state::AppState;

    /// Router with a dummy Gemini client. Only paths that fail before the
    /// model call are exercised in tests.
    pub fn test_app() -> Router {
        let gemini = GeminiClient::new("test-project", "test-token").expect("client builds");
        crate::build_app(AppState { gemini })
    }
}
