//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities (and client payloads)
//! to response DTOs.

use link_clients::DiscordUser;
use link_core::entities::{GameServer, SystemMember, User, UserServer};

use super::responses::{
    DiscordProfileResponse, LookupResponse, MemberResponse, ServerEntryResponse, ServerResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            discord_uid: user.discord_uid.clone(),
            minecraft_uuid: user.minecraft_uuid.as_ref().map(|u| u.as_str().to_string()),
            hytale_aid: user.hytale_aid.as_ref().map(|u| u.as_str().to_string()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for LookupResponse {
    fn from(user: &User) -> Self {
        Self {
            discord_uid: user.discord_uid.clone(),
            minecraft_uuid: user.minecraft_uuid.as_ref().map(|u| u.as_str().to_string()),
            hytale_aid: user.hytale_aid.as_ref().map(|u| u.as_str().to_string()),
        }
    }
}

// ============================================================================
// Server Mappers
// ============================================================================

impl From<&GameServer> for ServerResponse {
    fn from(server: &GameServer) -> Self {
        Self {
            id: server.id.to_string(),
            server_id: server.server_id.clone(),
            server_name: server.server_name.clone(),
            server_address: server.server_address.clone(),
            is_active: server.is_active,
        }
    }
}

impl From<&UserServer> for ServerEntryResponse {
    fn from(entry: &UserServer) -> Self {
        Self {
            server: ServerResponse::from(&entry.server),
            status: entry.status,
        }
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&SystemMember> for MemberResponse {
    fn from(member: &SystemMember) -> Self {
        Self {
            id: member.id.to_string(),
            system_id: member.system_id.clone(),
            member_id: member.member_id.clone(),
            name: member.name.clone(),
            display_name: member.display_name.clone(),
            avatar_url: member.avatar_url.clone(),
            sync_enabled: member.sync_enabled,
            last_synced_at: member.last_synced_at,
        }
    }
}

// ============================================================================
// Discord Mappers
// ============================================================================

impl From<&DiscordUser> for DiscordProfileResponse {
    fn from(user: &DiscordUser) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            discriminator: user.discriminator.clone(),
            avatar: user.avatar.clone(),
        }
    }
}
