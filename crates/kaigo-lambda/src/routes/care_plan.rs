use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_core::models::care_plan::GeneratedCarePlanDraft;
use kaigo_prompt::build_care_plan_prompt;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCarePlanRequest {
    pub assessment: AssessmentSnapshot,
    #[serde(default)]
    pub instruction: String,
}

/// Generate a care-plan draft: detect categories, select exemplars, build
/// the prompt, invoke the model.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<GeneratedCarePlanDraft>, ApiError> {
    // Manual parse so malformed bodies surface as invalid-argument, before
    // any model call.
    let req: GenerateCarePlanRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::InvalidArgument(format!("リクエストの形式が不正です: {e}")))?;

    let prompt = build_care_plan_prompt(&req.assessment, &req.instruction);
    let draft = kaigo_gemini::generate_care_plan(&state.gemini, &prompt).await?;

    Ok(Json(draft))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_support::test_app;

    #[tokio::test]
    async fn generate_without_token_is_unauthenticated() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/care-plan/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"assessment": {}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "unauthenticated");
    }

    #[tokio::test]
    async fn generate_with_missing_assessment_is_invalid_argument() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/care-plan/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, "Bearer test-token")
                    .body(Body::from(r#"{"instruction": "自立支援"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "invalid-argument");
    }
}
