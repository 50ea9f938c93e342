//! Post application repository.
//!
//! Stores applications to join a post's team. Lists are returned newest first. Stored status
//! strings are parsed at this boundary, so an unknown status surfaces as an internal error.

use chrono::Utc;
use entity::post_application;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::server::{
    error::AppError,
    model::application::{Application, ApplicationStatus},
};

pub struct PostApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending application.
    ///
    /// # Arguments
    /// - `post_id` - Post applied to
    /// - `applicant_id` - Applying user
    /// - `message` - Free text shown to the post owner
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application
    /// - `Err(AppError::Conflict)` - The applicant already applied to this post
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        post_id: i32,
        applicant_id: i32,
        message: String,
    ) -> Result<Application, AppError> {
        let now = Utc::now();

        let entity = post_application::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            applicant_id: ActiveValue::Set(applicant_id),
            status: ActiveValue::Set(ApplicationStatus::Pending.as_str().to_string()),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("You have already applied to this post".to_string())
            }
            _ => AppError::DbErr(err),
        })?;

        Ok(Application::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        let entity = post_application::Entity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Application::from_entity).transpose()?)
    }

    /// Finds the application a user made to a post, if any.
    pub async fn find_by_post_and_applicant(
        &self,
        post_id: i32,
        applicant_id: i32,
    ) -> Result<Option<Application>, AppError> {
        let entity = post_application::Entity::find()
            .filter(post_application::Column::PostId.eq(post_id))
            .filter(post_application::Column::ApplicantId.eq(applicant_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Application::from_entity).transpose()?)
    }

    /// Lists the applications to a post, newest first.
    ///
    /// # Arguments
    /// - `post_id` - Post to list applications for
    /// - `status` - Only return applications with this status when set
    ///
    /// # Returns
    /// - `Ok(Vec<Application>)` - Matching applications
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn list_for_post(
        &self,
        post_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, AppError> {
        let mut query =
            post_application::Entity::find().filter(post_application::Column::PostId.eq(post_id));
        if let Some(status) = status {
            query = query.filter(post_application::Column::Status.eq(status.as_str()));
        }

        let entities = query
            .order_by_desc(post_application::Column::CreatedAt)
            .order_by_desc(post_application::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|e| Application::from_entity(e).map_err(Into::into))
            .collect()
    }

    /// Lists the applications a user has made, newest first.
    pub async fn list_for_applicant(&self, applicant_id: i32) -> Result<Vec<Application>, AppError> {
        let entities = post_application::Entity::find()
            .filter(post_application::Column::ApplicantId.eq(applicant_id))
            .order_by_desc(post_application::Column::CreatedAt)
            .order_by_desc(post_application::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|e| Application::from_entity(e).map_err(Into::into))
            .collect()
    }

    /// Sets the status of an application and advances `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - The updated application
    /// - `Ok(None)` - No application with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, AppError> {
        let Some(existing) = post_application::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut application: post_application::ActiveModel = existing.into();
        application.status = ActiveValue::Set(status.as_str().to_string());
        application.updated_at = ActiveValue::Set(Utc::now());

        let entity = application.update(self.db).await?;

        Ok(Some(Application::from_entity(entity)?))
    }

    /// Deletes an application.
    ///
    /// # Returns
    /// - `Ok(true)` - Application deleted
    /// - `Ok(false)` - No application with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = post_application::Entity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
