//! PluralKit sync and raw import handlers

use axum::{extract::State, Json};
use link_service::{ImportRequest, ImportResponse, SyncResponse, SyncService, UserService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Sync the caller's PluralKit system members
///
/// POST /users/pluralkit/sync
pub async fn sync(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SyncResponse>> {
    // Re-read the account so a deleted user 404s instead of writing rows
    let user = UserService::new(state.service_context())
        .get_user(auth.user_id)
        .await?;

    let service = SyncService::new(state.service_context());
    let count = service.sync_members(user.id, &user.discord_uid).await?;

    Ok(Json(SyncResponse::synced(count)))
}

/// Import a raw /plu/ral payload
///
/// POST /users/plural/import
pub async fn import(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<ImportRequest>,
) -> ApiResult<Json<ImportResponse>> {
    let data = request
        .data
        .filter(|d| !d.is_null())
        .ok_or_else(|| ApiError::invalid_body("Import data required"))?;

    let service = SyncService::new(state.service_context());
    service.import_raw(auth.user_id, data).await?;

    Ok(Json(ImportResponse::imported()))
}
