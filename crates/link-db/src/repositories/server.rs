//! PostgreSQL implementation of ServerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use link_core::entities::{GameServer, UserServer};
use link_core::traits::{RepoResult, ServerRepository};
use link_core::value_objects::{Game, ServerId, ServerStatus, UserId};

use crate::models::{GameServerModel, UserServerModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ServerRepository
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    /// Create a new PgServerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ServerId) -> RepoResult<Option<GameServer>> {
        let result = sqlx::query_as::<_, GameServerModel>(
            r"
            SELECT id, game, server_id, server_name, server_address, is_active,
                   created_at, updated_at
            FROM game_servers
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(GameServer::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_active(&self, game: Game) -> RepoResult<Vec<GameServer>> {
        let rows = sqlx::query_as::<_, GameServerModel>(
            r"
            SELECT id, game, server_id, server_name, server_address, is_active,
                   created_at, updated_at
            FROM game_servers
            WHERE game = $1 AND is_active = TRUE
            ORDER BY server_name
            ",
        )
        .bind(game.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(GameServer::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        user_id: UserId,
        server_id: ServerId,
        status: ServerStatus,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_game_servers (user_id, server_id, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, server_id)
            DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
            ",
        )
        .bind(user_id.into_inner())
        .bind(server_id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn user_servers(&self, user_id: UserId, game: Game) -> RepoResult<Vec<UserServer>> {
        let rows = sqlx::query_as::<_, UserServerModel>(
            r"
            SELECT gs.id, gs.game, gs.server_id, gs.server_name, gs.server_address,
                   gs.is_active, gs.created_at, gs.updated_at, ugs.status
            FROM user_game_servers ugs
            JOIN game_servers gs ON ugs.server_id = gs.id
            WHERE ugs.user_id = $1 AND gs.game = $2
            ORDER BY gs.server_name
            ",
        )
        .bind(user_id.into_inner())
        .bind(game.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(UserServer::try_from).collect()
    }
}
