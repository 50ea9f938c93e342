//! Comment factory.

use crate::factory::helpers::{next_id, next_timestamp};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for post comments.
///
/// Defaults to a top-level comment with a unique body.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    user_id: i32,
    parent_comment_id: Option<i32>,
    body: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, post_id: i32, user_id: i32) -> Self {
        Self {
            db,
            post_id,
            user_id,
            parent_comment_id: None,
            body: format!("Comment {}", next_id()),
            deleted_at: None,
        }
    }

    pub fn reply_to(mut self, parent_comment_id: i32) -> Self {
        self.parent_comment_id = Some(parent_comment_id);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            user_id: ActiveValue::Set(self.user_id),
            parent_comment_id: ActiveValue::Set(self.parent_comment_id),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(next_timestamp()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment by `user_id` on `post_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, user_id).build().await
}
