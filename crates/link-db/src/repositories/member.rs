//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use link_core::entities::SystemMember;
use link_core::traits::{MemberRepository, NewSystemMember, RepoResult};
use link_core::value_objects::UserId;

use crate::models::SystemMemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_synced(&self, user_id: UserId) -> RepoResult<Vec<SystemMember>> {
        let rows = sqlx::query_as::<_, SystemMemberModel>(
            r"
            SELECT id, user_id, pk_system_id, pk_member_id, member_name,
                   member_display_name, member_avatar_url, sync_enabled,
                   last_synced_at, created_at, updated_at
            FROM pluralkit_members
            WHERE user_id = $1 AND sync_enabled = TRUE
            ORDER BY member_name
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SystemMember::from).collect())
    }

    #[instrument(skip(self, member), fields(member_id = %member.member_id))]
    async fn upsert_synced(&self, user_id: UserId, member: &NewSystemMember) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO pluralkit_members (
                user_id, pk_system_id, pk_member_id, member_name,
                member_display_name, member_avatar_url, sync_enabled, last_synced_at
            ) VALUES ($1, $2, $3, $4, $5, $6, TRUE, NOW())
            ON CONFLICT (user_id, pk_system_id, pk_member_id)
            DO UPDATE SET
                member_name = EXCLUDED.member_name,
                member_display_name = EXCLUDED.member_display_name,
                member_avatar_url = EXCLUDED.member_avatar_url,
                last_synced_at = NOW(),
                updated_at = NOW()
            ",
        )
        .bind(user_id.into_inner())
        .bind(&member.system_id)
        .bind(&member.member_id)
        .bind(&member.name)
        .bind(&member.display_name)
        .bind(&member.avatar_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, member), fields(member_id = %member.member_id))]
    async fn upsert_imported(&self, user_id: UserId, member: &NewSystemMember) -> RepoResult<()> {
        // Same conflict key as upsert_synced, but an import never touches
        // last_synced_at.
        sqlx::query(
            r"
            INSERT INTO pluralkit_members (
                user_id, pk_system_id, pk_member_id, member_name,
                member_display_name, member_avatar_url, sync_enabled
            ) VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            ON CONFLICT (user_id, pk_system_id, pk_member_id)
            DO UPDATE SET
                member_name = EXCLUDED.member_name,
                member_display_name = EXCLUDED.member_display_name,
                member_avatar_url = EXCLUDED.member_avatar_url,
                updated_at = NOW()
            ",
        )
        .bind(user_id.into_inner())
        .bind(&member.system_id)
        .bind(&member.member_id)
        .bind(&member.name)
        .bind(&member.display_name)
        .bind(&member.avatar_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_for_system(&self, user_id: UserId, system_id: &str) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM pluralkit_members
            WHERE user_id = $1 AND pk_system_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(system_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMemberRepository>();
    }
}
