//! Public lookup handlers
//!
//! Lets game servers resolve a player identifier to the linked accounts
//! without an authentication boundary; only the externally-safe subset of
//! the user record is returned.

use axum::{
    extract::{Path, State},
    Json,
};
use link_service::{LookupResponse, UserService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Look up a user by Minecraft UUID
///
/// GET /users/lookup/minecraft/{uuid}
pub async fn by_minecraft_uuid(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<LookupResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.lookup_minecraft(&uuid).await?;
    Ok(Json(response))
}

/// Look up a user by Hytale AID
///
/// GET /users/lookup/hytale/{aid}
pub async fn by_hytale_aid(
    State(state): State<AppState>,
    Path(aid): Path<String>,
) -> ApiResult<Json<LookupResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.lookup_hytale(&aid).await?;
    Ok(Json(response))
}
