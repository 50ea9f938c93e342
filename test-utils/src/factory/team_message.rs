//! Team chat message factory.

use crate::factory::helpers::{next_id, next_timestamp};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a chat message by `user_id` in the team of `post_id`.
pub async fn create_team_message(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::team_message::Model, DbErr> {
    entity::team_message::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        user_id: ActiveValue::Set(user_id),
        body: ActiveValue::Set(format!("Message {}", next_id())),
        created_at: ActiveValue::Set(next_timestamp()),
        ..Default::default()
    }
    .insert(db)
    .await
}
