//! User model <-> entity mapper

use link_core::entities::User;
use link_core::error::DomainError;
use link_core::value_objects::{GameUuid, UserId};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(model.id),
            discord_uid: model.discord_uid,
            minecraft_uuid: parse_identifier(model.minecraft_uuid, "minecraft_uuid")?,
            hytale_aid: parse_identifier(model.hytale_aid, "hytale_aid")?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn parse_identifier(
    value: Option<String>,
    column: &str,
) -> Result<Option<GameUuid>, DomainError> {
    value
        .map(|s| {
            GameUuid::parse(&s).map_err(|_| {
                DomainError::DatabaseError(format!("stored {column} is not a valid identifier"))
            })
        })
        .transpose()
}
