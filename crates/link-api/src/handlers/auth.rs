//! Authentication handlers
//!
//! Endpoints for the Discord OAuth flow and token verification.

use axum::{extract::State, Json};
use link_service::{AuthResponse, AuthService, AuthUrlResponse, CallbackRequest, VerifyResponse};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the Discord authorization URL
///
/// GET /auth/discord/url
pub async fn discord_url(State(state): State<AppState>) -> ApiResult<Json<AuthUrlResponse>> {
    let service = AuthService::new(state.service_context());
    Ok(Json(AuthUrlResponse {
        url: service.authorize_url(),
    }))
}

/// Complete the Discord OAuth flow
///
/// POST /auth/discord/callback
pub async fn discord_callback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CallbackRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login_with_code(request).await?;
    Ok(Json(response))
}

/// Verify the presented bearer token
///
/// GET /auth/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<VerifyResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify(auth.user_id).await?;
    Ok(Json(response))
}
