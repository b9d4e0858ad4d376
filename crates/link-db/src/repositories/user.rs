//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use link_core::entities::User;
use link_core::traits::{AccountUpdate, RepoResult, UserRepository};
use link_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_db_error, user_not_found};

const USER_COLUMNS: &str = "id, discord_uid, minecraft_uuid, hytale_aid, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_column(&self, column: &str, value: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_discord_uid(&self, discord_uid: &str) -> RepoResult<Option<User>> {
        self.find_by_column("discord_uid", discord_uid).await
    }

    #[instrument(skip(self))]
    async fn find_by_minecraft_uuid(&self, uuid: &str) -> RepoResult<Option<User>> {
        self.find_by_column("minecraft_uuid", uuid).await
    }

    #[instrument(skip(self))]
    async fn find_by_hytale_aid(&self, aid: &str) -> RepoResult<Option<User>> {
        self.find_by_column("hytale_aid", aid).await
    }

    #[instrument(skip(self))]
    async fn create(&self, discord_uid: &str) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(&format!(
            "INSERT INTO users (discord_uid) VALUES ($1) RETURNING {USER_COLUMNS}"
        ))
        .bind(discord_uid)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        User::try_from(model)
    }

    #[instrument(skip(self, update))]
    async fn update_accounts(&self, id: UserId, update: &AccountUpdate) -> RepoResult<User> {
        // Touched-flag per field keeps this a single static statement while
        // preserving partial-update semantics (untouched fields keep their value,
        // an explicit null clears).
        let (mc_touched, mc_value) = match &update.minecraft_uuid {
            Some(value) => (true, value.as_ref().map(|u| u.as_str().to_string())),
            None => (false, None),
        };
        let (ht_touched, ht_value) = match &update.hytale_aid {
            Some(value) => (true, value.as_ref().map(|u| u.as_str().to_string())),
            None => (false, None),
        };

        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            UPDATE users
            SET minecraft_uuid = CASE WHEN $2 THEN $3 ELSE minecraft_uuid END,
                hytale_aid = CASE WHEN $4 THEN $5 ELSE hytale_aid END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(mc_touched)
        .bind(mc_value)
        .bind(ht_touched)
        .bind(ht_value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match model {
            Some(model) => User::try_from(model),
            None => Err(user_not_found(id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
