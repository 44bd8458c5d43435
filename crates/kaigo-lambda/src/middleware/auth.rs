use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Bearer-token authentication middleware.
///
/// Runs before request validation and before any model call: both POST
/// routes fail with `unauthenticated` when no principal is presented,
/// regardless of body validity. On success, inserts `AuthUser` into request
/// extensions for handlers to use.
pub async fn require_auth(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthenticated("認証情報がありません。".to_string()))?
        .to_string();

    req.extensions_mut().insert(AuthUser { token });

    Ok(next.run(req).await)
}

/// Authenticated principal extracted from the Authorization header.
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct AuthUser {
    pub token: String,
}
