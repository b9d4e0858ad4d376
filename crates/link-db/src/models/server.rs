//! Game-server catalog database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the game_servers table
#[derive(Debug, Clone, FromRow)]
pub struct GameServerModel {
    pub id: i64,
    pub game: String,
    pub server_id: String,
    pub server_name: String,
    pub server_address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A game_servers row joined with the user's preference status
#[derive(Debug, Clone, FromRow)]
pub struct UserServerModel {
    pub id: i64,
    pub game: String,
    pub server_id: String,
    pub server_name: String,
    pub server_address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: String,
}
