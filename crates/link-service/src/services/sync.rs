//! Synchronization service
//!
//! Pulls a user's PluralKit system members into the local store, and
//! handles raw /plu/ral imports. "No linked system" is a normal outcome,
//! not an error; any other upstream failure propagates.

use chrono::Utc;
use rand::Rng;
use tracing::{info, instrument};

use link_core::traits::NewSystemMember;
use link_core::value_objects::UserId;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Import type recorded for raw /plu/ral payloads
const IMPORT_TYPE_PLURAL: &str = "plural";

/// System id recorded for imported payloads that carry none
const IMPORTED_SYSTEM_ID: &str = "imported";

/// Synchronization service
pub struct SyncService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SyncService<'a> {
    /// Create a new SyncService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sync all members of the user's PluralKit system
    ///
    /// Returns the number of members processed; zero when no system is
    /// linked to the Discord account.
    #[instrument(skip(self))]
    pub async fn sync_members(&self, user_id: UserId, discord_uid: &str) -> ServiceResult<u64> {
        let Some(system) = self.ctx.pluralkit().system_by_account(discord_uid).await? else {
            info!(user_id = %user_id, "No PluralKit system linked to account");
            return Ok(0);
        };

        let members = self.ctx.pluralkit().system_members(&system.id).await?;
        let mut synced: u64 = 0;

        for member in &members {
            let record = NewSystemMember {
                system_id: system.id.clone(),
                member_id: member.id.clone(),
                name: member.name.clone(),
                display_name: member.display_name.clone(),
                avatar_url: member.avatar_url.clone(),
            };
            self.ctx.member_repo().upsert_synced(user_id, &record).await?;
            synced += 1;
        }

        info!(user_id = %user_id, system_id = %system.id, synced, "PluralKit members synced");

        Ok(synced)
    }

    /// Record a raw /plu/ral payload, then upsert any members it carries
    ///
    /// A member without an id gets a synthesized one so repeated imports of
    /// id-less members do not collide destructively (and do not dedupe
    /// across imports either).
    #[instrument(skip(self, payload))]
    pub async fn import_raw(
        &self,
        user_id: UserId,
        payload: serde_json::Value,
    ) -> ServiceResult<()> {
        self.ctx
            .import_repo()
            .record(user_id, IMPORT_TYPE_PLURAL, &payload)
            .await?;

        let Some(members) = payload.get("members").and_then(|m| m.as_array()) else {
            info!(user_id = %user_id, "Import payload carried no member list");
            return Ok(());
        };

        let system_id = payload
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or(IMPORTED_SYSTEM_ID)
            .to_string();

        for member in members {
            let member_id = member
                .get("id")
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(synthesize_member_id);

            let record = NewSystemMember {
                system_id: system_id.clone(),
                member_id,
                name: json_string(member, "name"),
                display_name: json_string(member, "display_name"),
                avatar_url: json_string(member, "avatar_url"),
            };
            self.ctx.member_repo().upsert_imported(user_id, &record).await?;
        }

        info!(user_id = %user_id, count = members.len(), "Imported /plu/ral members");

        Ok(())
    }
}

fn json_string(value: &serde_json::Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(String::from)
}

/// Timestamp + random suffix, unique enough for id-less imported members
fn synthesize_member_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!("imported_{millis}_{suffix:04}")
}
