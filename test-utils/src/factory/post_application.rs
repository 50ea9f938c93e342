//! Post application factory.

use crate::factory::helpers::next_timestamp;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for applications to a post.
///
/// Defaults to a `pending` application with an empty message.
pub struct PostApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    applicant_id: i32,
    status: String,
    message: String,
}

impl<'a> PostApplicationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, post_id: i32, applicant_id: i32) -> Self {
        Self {
            db,
            post_id,
            applicant_id,
            status: "pending".to_string(),
            message: String::new(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub async fn build(self) -> Result<entity::post_application::Model, DbErr> {
        let now = next_timestamp();
        entity::post_application::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            applicant_id: ActiveValue::Set(self.applicant_id),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending application from `applicant_id` to `post_id`.
pub async fn create_application(
    db: &DatabaseConnection,
    post_id: i32,
    applicant_id: i32,
) -> Result<entity::post_application::Model, DbErr> {
    PostApplicationFactory::new(db, post_id, applicant_id)
        .build()
        .await
}
