//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! keys; database-assigned ids are serialized as strings.

use chrono::{DateTime, Utc};
use link_core::value_objects::ServerStatus;
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Provider authorization URL
#[derive(Debug, Serialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
    pub discord: DiscordProfileResponse,
}

/// Token verification response
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: UserResponse,
}

/// Discord profile subset echoed back after login
#[derive(Debug, Clone, Serialize)]
pub struct DiscordProfileResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// ============================================================================
// User Responses
// ============================================================================

/// The local account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub discord_uid: String,
    pub minecraft_uuid: Option<String>,
    pub hytale_aid: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate profile: account, per-server preferences, synced members
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub minecraft_servers: Vec<ServerEntryResponse>,
    pub hytale_servers: Vec<ServerEntryResponse>,
    pub pluralkit_members: Vec<MemberResponse>,
}

/// Externally-safe lookup result for game servers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub discord_uid: String,
    pub minecraft_uuid: Option<String>,
    pub hytale_aid: Option<String>,
}

// ============================================================================
// Server Responses
// ============================================================================

/// A game-server catalog entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponse {
    pub id: String,
    pub server_id: String,
    pub server_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    pub is_active: bool,
}

/// A catalog entry with the caller's visibility status
#[derive(Debug, Clone, Serialize)]
pub struct ServerEntryResponse {
    pub server: ServerResponse,
    pub status: ServerStatus,
}

/// Result of a status toggle
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusResponse {
    pub success: bool,
    pub server_id: String,
    pub status: ServerStatus,
}

// ============================================================================
// Sync/Import Responses
// ============================================================================

/// A synced PluralKit member
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub system_id: String,
    pub member_id: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub sync_enabled: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}

/// Result of a PluralKit sync
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub success: bool,
    pub synced_count: u64,
    pub message: String,
}

impl SyncResponse {
    /// Build the standard "synced N members" response
    #[must_use]
    pub fn synced(count: u64) -> Self {
        Self {
            success: true,
            synced_count: count,
            message: format!("Synced {count} PluralKit members"),
        }
    }
}

/// Result of a raw import
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
}

impl ImportResponse {
    /// Build the standard import-succeeded response
    #[must_use]
    pub fn imported() -> Self {
        Self {
            success: true,
            message: "Successfully imported /plu/ral data".to_string(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe body
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
