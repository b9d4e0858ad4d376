//! User service
//!
//! Account lookup/creation, linked-account updates, profile composition,
//! per-server visibility, and the public lookup endpoints.

use tracing::{info, instrument};

use link_core::entities::User;
use link_core::value_objects::{Game, ServerId, ServerStatus, UserId};

use crate::dto::{
    LookupResponse, MemberResponse, ProfileResponse, ServerEntryResponse, ServerResponse,
    SetStatusResponse, UpdateAccountsRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Return the account for a Discord uid, creating it on first login
    #[instrument(skip(self))]
    pub async fn find_or_create(&self, discord_uid: &str) -> ServiceResult<User> {
        if let Some(user) = self.ctx.user_repo().find_by_discord_uid(discord_uid).await? {
            return Ok(user);
        }

        let user = self.ctx.user_repo().create(discord_uid).await?;
        info!(user_id = %user.id, "Created account for new Discord identity");
        Ok(user)
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Apply a partial update of the linked game accounts
    ///
    /// Identifiers are validated against the canonical UUID shape before
    /// anything is persisted; omitted fields stay untouched.
    #[instrument(skip(self, request))]
    pub async fn update_accounts(
        &self,
        user_id: UserId,
        request: UpdateAccountsRequest,
    ) -> ServiceResult<UserResponse> {
        let update = request.to_update()?;

        let user = if update.is_empty() {
            self.get_user(user_id).await?
        } else {
            let user = self.ctx.user_repo().update_accounts(user_id, &update).await?;
            info!(user_id = %user_id, "Updated linked game accounts");
            user
        };

        Ok(UserResponse::from(&user))
    }

    /// Compose the aggregate profile read model
    ///
    /// Catalog entries without an explicit preference row are absent here;
    /// the client treats them as "disabled". No side effects.
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: UserId) -> ServiceResult<ProfileResponse> {
        let user = self.get_user(user_id).await?;

        let minecraft = self
            .ctx
            .server_repo()
            .user_servers(user_id, Game::Minecraft)
            .await?;
        let hytale = self
            .ctx
            .server_repo()
            .user_servers(user_id, Game::Hytale)
            .await?;
        let members = self.ctx.member_repo().find_synced(user_id).await?;

        Ok(ProfileResponse {
            user: UserResponse::from(&user),
            minecraft_servers: minecraft.iter().map(ServerEntryResponse::from).collect(),
            hytale_servers: hytale.iter().map(ServerEntryResponse::from).collect(),
            pluralkit_members: members.iter().map(MemberResponse::from).collect(),
        })
    }

    /// List active catalog entries for one game
    #[instrument(skip(self))]
    pub async fn list_servers(&self, game: Game) -> ServiceResult<Vec<ServerResponse>> {
        let servers = self.ctx.server_repo().list_active(game).await?;
        Ok(servers.iter().map(ServerResponse::from).collect())
    }

    /// Upsert the caller's visibility status for one catalog entry
    #[instrument(skip(self))]
    pub async fn set_server_status(
        &self,
        user_id: UserId,
        game: Game,
        server_id: ServerId,
        status: ServerStatus,
    ) -> ServiceResult<SetStatusResponse> {
        // A preference must reference an existing catalog entry of the
        // addressed game.
        let server = self
            .ctx
            .server_repo()
            .find_by_id(server_id)
            .await?
            .filter(|s| s.game == game)
            .ok_or_else(|| ServiceError::not_found("Server", server_id.to_string()))?;

        self.ctx
            .server_repo()
            .set_status(user_id, server.id, status)
            .await?;

        info!(user_id = %user_id, server_id = %server.id, %status, "Server status updated");

        Ok(SetStatusResponse {
            success: true,
            server_id: server.id.to_string(),
            status,
        })
    }

    /// Public lookup by Minecraft UUID; returns only the externally-safe subset
    #[instrument(skip(self))]
    pub async fn lookup_minecraft(&self, uuid: &str) -> ServiceResult<LookupResponse> {
        // Stored identifiers are normalized to lowercase
        let user = self
            .ctx
            .user_repo()
            .find_by_minecraft_uuid(&uuid.to_lowercase())
            .await?
            .ok_or_else(|| ServiceError::not_found("User", uuid))?;

        Ok(LookupResponse::from(&user))
    }

    /// Public lookup by Hytale AID; returns only the externally-safe subset
    #[instrument(skip(self))]
    pub async fn lookup_hytale(&self, aid: &str) -> ServiceResult<LookupResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_hytale_aid(&aid.to_lowercase())
            .await?
            .ok_or_else(|| ServiceError::not_found("User", aid))?;

        Ok(LookupResponse::from(&user))
    }
}
