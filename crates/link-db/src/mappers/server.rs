//! Game-server model <-> entity mappers

use link_core::entities::{GameServer, UserServer};
use link_core::error::DomainError;
use link_core::value_objects::{Game, ServerId, ServerStatus};

use crate::models::{GameServerModel, UserServerModel};

impl TryFrom<GameServerModel> for GameServer {
    type Error = DomainError;

    fn try_from(model: GameServerModel) -> Result<Self, Self::Error> {
        Ok(GameServer {
            id: ServerId::new(model.id),
            game: parse_game(&model.game)?,
            server_id: model.server_id,
            server_name: model.server_name,
            server_address: model.server_address,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<UserServerModel> for UserServer {
    type Error = DomainError;

    fn try_from(model: UserServerModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<ServerStatus>()
            .map_err(|_| DomainError::DatabaseError(format!("stored status is invalid: {}", model.status)))?;

        let server = GameServer {
            id: ServerId::new(model.id),
            game: parse_game(&model.game)?,
            server_id: model.server_id,
            server_name: model.server_name,
            server_address: model.server_address,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };

        Ok(UserServer { server, status })
    }
}

fn parse_game(game: &str) -> Result<Game, DomainError> {
    game.parse::<Game>()
        .map_err(|_| DomainError::DatabaseError(format!("stored game is invalid: {game}")))
}
