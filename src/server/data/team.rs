//! Team repository.
//!
//! Reads team membership from posts and accepted applications, and stores the team chat.

use chrono::Utc;
use entity::{post, post_application, team_message, user};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{application::ApplicationStatus, team::TeamMessage};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the posts owned by a user, newest first.
    pub async fn owned_posts(&self, user_id: i32) -> Result<Vec<post::Model>, DbErr> {
        post::Entity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists the posts a user was accepted to, newest first.
    pub async fn member_posts(&self, user_id: i32) -> Result<Vec<post::Model>, DbErr> {
        post::Entity::find()
            .inner_join(post_application::Entity)
            .filter(post_application::Column::ApplicantId.eq(user_id))
            .filter(post_application::Column::Status.eq(ApplicationStatus::Accepted.as_str()))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists the accepted applications of a post with their applicants, in acceptance order.
    pub async fn accepted_members(
        &self,
        post_id: i32,
    ) -> Result<Vec<(post_application::Model, Option<user::Model>)>, DbErr> {
        post_application::Entity::find()
            .find_also_related(user::Entity)
            .filter(post_application::Column::PostId.eq(post_id))
            .filter(post_application::Column::Status.eq(ApplicationStatus::Accepted.as_str()))
            .order_by_asc(post_application::Column::UpdatedAt)
            .order_by_asc(post_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Stores a chat message and returns it with the author's name.
    ///
    /// # Returns
    /// - `Ok(TeamMessage)` - The stored message
    /// - `Err(DbErr)` - Database error, including an unknown post or user
    pub async fn create_message(
        &self,
        post_id: i32,
        user_id: i32,
        body: String,
    ) -> Result<TeamMessage, DbErr> {
        let entity = team_message::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = user::Entity::find_by_id(user_id).one(self.db).await?;

        Ok(TeamMessage::from_entity(entity, author))
    }

    /// Lists chat messages of a post in ascending id order.
    ///
    /// With `after_id` returns up to `limit` messages newer than that id, for polling.
    /// Without it returns the latest `limit` messages.
    ///
    /// # Arguments
    /// - `post_id` - Team to read the chat of
    /// - `after_id` - Last message id the caller already has
    /// - `limit` - Most messages to return
    ///
    /// # Returns
    /// - `Ok(Vec<TeamMessage>)` - Messages, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_messages(
        &self,
        post_id: i32,
        after_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<TeamMessage>, DbErr> {
        let query = team_message::Entity::find()
            .find_also_related(user::Entity)
            .filter(team_message::Column::PostId.eq(post_id));

        let rows = match after_id {
            Some(after_id) => {
                query
                    .filter(team_message::Column::Id.gt(after_id))
                    .order_by_asc(team_message::Column::Id)
                    .limit(limit)
                    .all(self.db)
                    .await?
            }
            None => {
                let mut rows = query
                    .order_by_desc(team_message::Column::Id)
                    .limit(limit)
                    .all(self.db)
                    .await?;
                rows.reverse();
                rows
            }
        };

        Ok(rows
            .into_iter()
            .map(|(message, author)| TeamMessage::from_entity(message, author))
            .collect())
    }
}
