//! PluralKit member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the pluralkit_members table
#[derive(Debug, Clone, FromRow)]
pub struct SystemMemberModel {
    pub id: i64,
    pub user_id: i64,
    pub pk_system_id: String,
    pub pk_member_id: String,
    pub member_name: Option<String>,
    pub member_display_name: Option<String>,
    pub member_avatar_url: Option<String>,
    pub sync_enabled: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
