//! Synchronized PluralKit system member

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// A system member record synchronized from PluralKit (or imported)
///
/// Uniquely identified by `(user, system, member)`; upserts on that key
/// refresh the display fields and, for API syncs, `last_synced_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemMember {
    pub id: i64,
    pub user_id: UserId,
    pub system_id: String,
    pub member_id: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub sync_enabled: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
