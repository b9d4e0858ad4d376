//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{auth, health, lookup, plural, servers, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}

/// Health check routes (exported separately)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/discord/url", get(auth::discord_url))
        .route("/auth/discord/callback", post(auth::discord_callback))
        .route("/auth/verify", get(auth::verify))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // Profile
        .route("/users/me", get(users::get_profile))
        .route("/users/me", patch(users::update_accounts))
        // Server catalogs and per-server status
        .route("/users/minecraft-servers", get(servers::list_minecraft_servers))
        .route("/users/hytale-servers", get(servers::list_hytale_servers))
        .route(
            "/users/minecraft-servers/:server_id/status",
            put(servers::set_minecraft_server_status),
        )
        .route(
            "/users/hytale-servers/:server_id/status",
            put(servers::set_hytale_server_status),
        )
        // PluralKit sync and raw import
        .route("/users/pluralkit/sync", post(plural::sync))
        .route("/users/plural/import", post(plural::import))
        // Public lookups
        .route("/users/lookup/minecraft/:uuid", get(lookup::by_minecraft_uuid))
        .route("/users/lookup/hytale/:aid", get(lookup::by_hytale_aid))
}
