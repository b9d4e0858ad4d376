//! Game-server catalog entities

use chrono::{DateTime, Utc};

use crate::value_objects::{Game, ServerId, ServerStatus};

/// A catalog entry for a game server
///
/// Rows are maintained out of band; the application only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameServer {
    pub id: ServerId,
    pub game: Game,
    pub server_id: String,
    pub server_name: String,
    pub server_address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalog entry joined with one user's visibility status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServer {
    pub server: GameServer,
    pub status: ServerStatus,
}
