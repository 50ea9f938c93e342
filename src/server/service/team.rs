//! Teams and team chat.
//!
//! The team of a post is its owner plus every applicant whose application was accepted.
//! Only team members can see the member list and use the chat.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        application::PostApplicationRepository, post::PostRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        application::ApplicationStatus,
        team::{MyTeam, Team, TeamMember, TeamMessage, TeamRole, MESSAGE_PAGE_SIZE},
        user::User,
    },
    util::parse::required_text,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the team of a post.
    ///
    /// Members are the owner first, then accepted applicants in acceptance order.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - The caller is not on the team
    pub async fn get_team(&self, post_id: i32, user_id: i32) -> Result<Team, AppError> {
        let post = self.require_member(post_id, user_id).await?;

        let owner = UserRepository::new(self.db)
            .find_by_id(post.user_id)
            .await?
            .ok_or_else(|| InternalError::MissingReference(format!("user {}", post.user_id)))?;

        let mut members = vec![TeamMember {
            user: owner,
            role: TeamRole::Owner,
            joined_at: post.created_at,
        }];
        for (application, applicant) in TeamRepository::new(self.db)
            .accepted_members(post_id)
            .await?
        {
            if let Some(applicant) = applicant {
                members.push(TeamMember {
                    user: User::from_entity(applicant),
                    role: TeamRole::Member,
                    joined_at: application.updated_at,
                });
            }
        }

        Ok(Team {
            post_id: post.id,
            title: post.title,
            members,
        })
    }

    /// Lists the teams the user belongs to: owned posts first, then accepted applications.
    pub async fn get_my_teams(&self, user_id: i32) -> Result<Vec<MyTeam>, AppError> {
        let repo = TeamRepository::new(self.db);

        let owned = repo.owned_posts(user_id).await?.into_iter().map(|post| MyTeam {
            post_id: post.id,
            title: post.title,
            role: TeamRole::Owner,
        });
        let joined = repo.member_posts(user_id).await?.into_iter().map(|post| MyTeam {
            post_id: post.id,
            title: post.title,
            role: TeamRole::Member,
        });

        Ok(owned.chain(joined).collect())
    }

    /// Removes a member from a team.
    ///
    /// The owner can remove any member; a member can only remove themselves, which is how
    /// they leave. The member's application is deleted, so they may apply again.
    ///
    /// # Arguments
    /// - `post_id` - Post of the team
    /// - `target_user_id` - Member to remove
    /// - `user_id` - Current user
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(AppError::NotFound)` - No post with that id, or the target is not a member
    /// - `Err(AppError::Forbidden)` - Neither the owner nor the target
    /// - `Err(AppError::BadRequest)` - The owner tried to leave their own team
    pub async fn remove_member(
        &self,
        post_id: i32,
        target_user_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        let is_owner = post.user_id == user_id;
        let is_self = target_user_id == user_id;
        if !is_owner && !is_self {
            return Err(AppError::Forbidden(
                "Only the owner can remove other members".to_string(),
            ));
        }
        if is_owner && is_self {
            return Err(AppError::BadRequest(
                "The owner cannot leave their own team; delete the post instead".to_string(),
            ));
        }

        let repo = PostApplicationRepository::new(self.db);
        let application = repo
            .find_by_post_and_applicant(post_id, target_user_id)
            .await?
            .filter(|a| a.status == ApplicationStatus::Accepted)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User {} is not a member of team {}",
                    target_user_id, post_id
                ))
            })?;

        repo.delete(application.id).await?;

        tracing::info!(
            "User {} removed user {} from team {}",
            user_id,
            target_user_id,
            post_id
        );

        Ok(())
    }

    /// Lists chat messages of a team, oldest first.
    ///
    /// Without `after_id` returns the latest page; with it returns the page of messages
    /// newer than that id, so clients can poll with the id of the last message they have.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamMessage>)` - Up to one page of messages
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - The caller is not on the team
    pub async fn list_messages(
        &self,
        post_id: i32,
        user_id: i32,
        after_id: Option<i32>,
    ) -> Result<Vec<TeamMessage>, AppError> {
        self.require_member(post_id, user_id).await?;

        let messages = TeamRepository::new(self.db)
            .list_messages(post_id, after_id, MESSAGE_PAGE_SIZE)
            .await?;

        Ok(messages)
    }

    /// Posts a chat message to a team.
    ///
    /// # Returns
    /// - `Ok(TeamMessage)` - The stored message
    /// - `Err(AppError::BadRequest)` - Blank body
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - The caller is not on the team
    pub async fn create_message(
        &self,
        post_id: i32,
        user_id: i32,
        body: &str,
    ) -> Result<TeamMessage, AppError> {
        let body = required_text("body", body)?;
        self.require_member(post_id, user_id).await?;

        let message = TeamRepository::new(self.db)
            .create_message(post_id, user_id, body)
            .await?;

        tracing::debug!(
            "User {} posted message {} to team {}",
            user_id,
            message.id,
            post_id
        );

        Ok(message)
    }

    /// Loads the post and checks that `user_id` is its owner or an accepted applicant.
    async fn require_member(
        &self,
        post_id: i32,
        user_id: i32,
    ) -> Result<entity::post::Model, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;
        if post.user_id == user_id {
            return Ok(post);
        }

        let accepted = PostApplicationRepository::new(self.db)
            .find_by_post_and_applicant(post_id, user_id)
            .await?
            .is_some_and(|a| a.status == ApplicationStatus::Accepted);
        if !accepted {
            return Err(AppError::Forbidden(
                "Only team members can access this team".to_string(),
            ));
        }

        Ok(post)
    }
}
