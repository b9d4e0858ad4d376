//! User entity - a Discord identity linked to game accounts

use chrono::{DateTime, Utc};

use crate::value_objects::{GameUuid, UserId};

/// A local account rooted in a Discord identity
///
/// The Discord uid is immutable and one-to-one with the local account.
/// Both game identifiers start out unset and are only changed through
/// explicit profile updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub discord_uid: String,
    pub minecraft_uuid: Option<GameUuid>,
    pub hytale_aid: Option<GameUuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether any game account is linked
    #[inline]
    pub fn has_linked_account(&self) -> bool {
        self.minecraft_uuid.is_some() || self.hytale_aid.is_some()
    }
}
