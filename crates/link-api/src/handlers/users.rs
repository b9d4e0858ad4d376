//! User handlers
//!
//! Endpoints for the aggregate profile and linked-account updates.

use axum::{extract::State, Json};
use link_service::{ProfileResponse, UpdateAccountsRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's aggregate profile
///
/// GET /users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Partially update the caller's linked game accounts
///
/// PATCH /users/me
pub async fn update_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateAccountsRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_accounts(auth.user_id, request).await?;
    Ok(Json(response))
}
