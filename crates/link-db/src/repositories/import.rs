//! PostgreSQL implementation of ImportRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use link_core::traits::{ImportRepository, RepoResult};
use link_core::value_objects::UserId;

use super::error::map_db_error;

/// PostgreSQL implementation of ImportRepository
#[derive(Clone)]
pub struct PgImportRepository {
    pool: PgPool,
}

impl PgImportRepository {
    /// Create a new PgImportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportRepository for PgImportRepository {
    #[instrument(skip(self, data))]
    async fn record(
        &self,
        user_id: UserId,
        import_type: &str,
        data: &serde_json::Value,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO plural_imports (user_id, import_data, import_type)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(user_id.into_inner())
        .bind(Json(data))
        .bind(import_type)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgImportRepository>();
    }
}
