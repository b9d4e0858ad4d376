//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{GameServer, SystemMember, User, UserServer};
use crate::error::DomainError;
use crate::value_objects::{Game, GameUuid, ServerId, ServerStatus, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Partial update of a user's linked game accounts
///
/// Outer `None` means "field not supplied, leave untouched"; inner `None`
/// means "explicitly clear the field".
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub minecraft_uuid: Option<Option<GameUuid>>,
    pub hytale_aid: Option<Option<GameUuid>>,
}

impl AccountUpdate {
    /// True when no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.minecraft_uuid.is_none() && self.hytale_aid.is_none()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by local ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by Discord uid
    async fn find_by_discord_uid(&self, discord_uid: &str) -> RepoResult<Option<User>>;

    /// Find user by linked Minecraft UUID
    async fn find_by_minecraft_uuid(&self, uuid: &str) -> RepoResult<Option<User>>;

    /// Find user by linked Hytale AID
    async fn find_by_hytale_aid(&self, aid: &str) -> RepoResult<Option<User>>;

    /// Create a new user with no linked game accounts
    async fn create(&self, discord_uid: &str) -> RepoResult<User>;

    /// Apply a partial account update and return the fresh row
    async fn update_accounts(&self, id: UserId, update: &AccountUpdate) -> RepoResult<User>;

    /// Delete a user and all dependent rows
    async fn delete(&self, id: UserId) -> RepoResult<()>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Find a catalog entry by ID
    async fn find_by_id(&self, id: ServerId) -> RepoResult<Option<GameServer>>;

    /// List active catalog entries for one game, ordered by name
    async fn list_active(&self, game: Game) -> RepoResult<Vec<GameServer>>;

    /// Upsert a user's visibility status for a server
    async fn set_status(
        &self,
        user_id: UserId,
        server_id: ServerId,
        status: ServerStatus,
    ) -> RepoResult<()>;

    /// List the catalog entries a user holds an explicit preference for
    async fn user_servers(&self, user_id: UserId, game: Game) -> RepoResult<Vec<UserServer>>;
}

// ============================================================================
// Member Repository
// ============================================================================

/// Display fields for a member upsert
#[derive(Debug, Clone)]
pub struct NewSystemMember {
    pub system_id: String,
    pub member_id: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List a user's sync-enabled members
    async fn find_synced(&self, user_id: UserId) -> RepoResult<Vec<SystemMember>>;

    /// Upsert from an API sync, refreshing `last_synced_at`
    async fn upsert_synced(&self, user_id: UserId, member: &NewSystemMember) -> RepoResult<()>;

    /// Upsert from a raw import; `last_synced_at` is left untouched
    async fn upsert_imported(&self, user_id: UserId, member: &NewSystemMember) -> RepoResult<()>;

    /// Count member rows for one (user, system) pair
    async fn count_for_system(&self, user_id: UserId, system_id: &str) -> RepoResult<i64>;
}

// ============================================================================
// Import Repository
// ============================================================================

#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Append a raw import payload to the audit log
    async fn record(
        &self,
        user_id: UserId,
        import_type: &str,
        data: &serde_json::Value,
    ) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_update_is_empty() {
        assert!(AccountUpdate::default().is_empty());

        let update = AccountUpdate {
            minecraft_uuid: Some(None),
            hytale_aid: None,
        };
        assert!(!update.is_empty());
    }
}
