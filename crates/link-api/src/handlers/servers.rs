//! Server catalog handlers
//!
//! Public catalog listings and authenticated per-server status toggles.

use axum::{
    extract::{Path, State},
    Json,
};
use link_core::Game;
use link_service::{ServerResponse, SetServerStatusRequest, SetStatusResponse, UserService};

use crate::extractors::{AuthUser, OptionalAuthUser, ServerIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List active Minecraft servers
///
/// GET /users/minecraft-servers
pub async fn list_minecraft_servers(
    State(state): State<AppState>,
    _auth: OptionalAuthUser,
) -> ApiResult<Json<Vec<ServerResponse>>> {
    list_servers(state, Game::Minecraft).await
}

/// List active Hytale servers
///
/// GET /users/hytale-servers
pub async fn list_hytale_servers(
    State(state): State<AppState>,
    _auth: OptionalAuthUser,
) -> ApiResult<Json<Vec<ServerResponse>>> {
    list_servers(state, Game::Hytale).await
}

async fn list_servers(state: AppState, game: Game) -> ApiResult<Json<Vec<ServerResponse>>> {
    let service = UserService::new(state.service_context());
    let servers = service.list_servers(game).await?;
    Ok(Json(servers))
}

/// Toggle the caller's status on a Minecraft server
///
/// PUT /users/minecraft-servers/{server_id}/status
pub async fn set_minecraft_server_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ServerIdPath>,
    Json(request): Json<SetServerStatusRequest>,
) -> ApiResult<Json<SetStatusResponse>> {
    set_server_status(state, auth, Game::Minecraft, path, request).await
}

/// Toggle the caller's status on a Hytale server
///
/// PUT /users/hytale-servers/{server_id}/status
pub async fn set_hytale_server_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ServerIdPath>,
    Json(request): Json<SetServerStatusRequest>,
) -> ApiResult<Json<SetStatusResponse>> {
    set_server_status(state, auth, Game::Hytale, path, request).await
}

async fn set_server_status(
    state: AppState,
    auth: AuthUser,
    game: Game,
    path: ServerIdPath,
    request: SetServerStatusRequest,
) -> ApiResult<Json<SetStatusResponse>> {
    let server_id = path.server_id()?;

    let service = UserService::new(state.service_context());
    let response = service
        .set_server_status(auth.user_id, game, server_id, request.status)
        .await?;
    Ok(Json(response))
}
