//! Applications to join a post's team.
//!
//! Owners review the applications to their posts; applicants create, list and withdraw their
//! own. Ownership failures are `Forbidden`, missing resources `NotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{application::PostApplicationRepository, post::PostRepository},
    error::AppError,
    model::{
        application::{Application, ApplicationStatus},
        post::PostStatus,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies to a post.
    ///
    /// # Arguments
    /// - `post_id` - Post to apply to
    /// - `applicant_id` - Current user
    /// - `message` - Note for the post owner
    ///
    /// # Returns
    /// - `Ok(Application)` - The pending application
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Conflict)` - Post is not open, or the user already applied
    /// - `Err(AppError::BadRequest)` - The user owns the post
    pub async fn apply(
        &self,
        post_id: i32,
        applicant_id: i32,
        message: String,
    ) -> Result<Application, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        if post.status != PostStatus::Open.as_str() {
            return Err(AppError::Conflict(
                "Post is not accepting applications".to_string(),
            ));
        }
        if post.user_id == applicant_id {
            return Err(AppError::BadRequest(
                "Cannot apply to your own post".to_string(),
            ));
        }

        let repo = PostApplicationRepository::new(self.db);
        if repo
            .find_by_post_and_applicant(post_id, applicant_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You have already applied to this post".to_string(),
            ));
        }

        let application = repo.create(post_id, applicant_id, message).await?;

        tracing::info!(
            "User {} applied to post {} (application {})",
            applicant_id,
            post_id,
            application.id
        );

        Ok(application)
    }

    /// Lists the applications to a post owned by `owner_id`, newest first.
    ///
    /// # Arguments
    /// - `post_id` - Post to list applications for
    /// - `owner_id` - Current user, must own the post
    /// - `status` - Optional status filter as given by the client
    ///
    /// # Returns
    /// - `Ok(Vec<Application>)` - Matching applications
    /// - `Err(AppError::BadRequest)` - Unknown status
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - The post belongs to someone else
    pub async fn list_for_post(
        &self,
        post_id: i32,
        owner_id: i32,
        status: Option<&str>,
    ) -> Result<Vec<Application>, AppError> {
        let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => Some(
                ApplicationStatus::parse(value)
                    .ok_or_else(|| AppError::BadRequest(format!("invalid status: {}", value)))?,
            ),
            None => None,
        };

        self.require_post_owner(post_id, owner_id).await?;

        PostApplicationRepository::new(self.db)
            .list_for_post(post_id, status)
            .await
    }

    /// Lists the applications made by `applicant_id`, newest first.
    pub async fn list_mine(&self, applicant_id: i32) -> Result<Vec<Application>, AppError> {
        PostApplicationRepository::new(self.db)
            .list_for_applicant(applicant_id)
            .await
    }

    /// Accepts or rejects a pending application.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::BadRequest)` - Status is not `accepted` or `rejected`
    /// - `Err(AppError::NotFound)` - No application with that id
    /// - `Err(AppError::Forbidden)` - The caller does not own the post
    /// - `Err(AppError::Conflict)` - The application was already decided
    pub async fn set_status(
        &self,
        application_id: i32,
        owner_id: i32,
        status: &str,
    ) -> Result<Application, AppError> {
        let status = match ApplicationStatus::parse(status.trim()) {
            Some(status @ (ApplicationStatus::Accepted | ApplicationStatus::Rejected)) => status,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "invalid status: {} (must be 'accepted' or 'rejected')",
                    status
                )))
            }
        };

        let repo = PostApplicationRepository::new(self.db);
        let application = repo.find_by_id(application_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Application {} not found", application_id))
        })?;

        self.require_post_owner(application.post_id, owner_id).await?;

        if application.status != ApplicationStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Application is already {}",
                application.status.as_str()
            )));
        }

        let updated = repo
            .update_status(application_id, status)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Application {} not found", application_id))
            })?;

        tracing::info!(
            "User {} set application {} to {}",
            owner_id,
            application_id,
            status.as_str()
        );

        Ok(updated)
    }

    /// Withdraws the caller's own application to a post.
    ///
    /// # Returns
    /// - `Ok(())` - Application deleted
    /// - `Err(AppError::NotFound)` - The caller has no application to that post
    pub async fn withdraw(&self, post_id: i32, applicant_id: i32) -> Result<(), AppError> {
        let repo = PostApplicationRepository::new(self.db);

        let application = repo
            .find_by_post_and_applicant(post_id, applicant_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No application to post {} found", post_id))
            })?;

        repo.delete(application.id).await?;

        tracing::info!(
            "User {} withdrew application {} to post {}",
            applicant_id,
            application.id,
            post_id
        );

        Ok(())
    }

    async fn require_post_owner(&self, post_id: i32, user_id: i32) -> Result<(), AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        if post.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the post owner can manage its applications".to_string(),
            ));
        }

        Ok(())
    }
}
