//! PluralKit member model <-> entity mapper

use link_core::entities::SystemMember;
use link_core::value_objects::UserId;

use crate::models::SystemMemberModel;

impl From<SystemMemberModel> for SystemMember {
    fn from(model: SystemMemberModel) -> Self {
        SystemMember {
            id: model.id,
            user_id: UserId::new(model.user_id),
            system_id: model.pk_system_id,
            member_id: model.pk_member_id,
            name: model.member_name,
            display_name: model.member_display_name,
            avatar_url: model.member_avatar_url,
            sync_enabled: model.sync_enabled,
            last_synced_at: model.last_synced_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
