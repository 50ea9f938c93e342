//! Comment threads on posts.
//!
//! Anyone logged in can comment on a post or reply to a top-level comment. Replies to
//! replies are rejected. Authors can delete their own comments; a deleted comment stays in
//! the thread with its body masked, and its replies are no longer listed.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::comment::{Comment, CommentExpand, CommentThread},
    util::parse::required_text,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a top-level comment to a post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::BadRequest)` - Blank body
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn create_root(
        &self,
        post_id: i32,
        user_id: i32,
        body: &str,
    ) -> Result<Comment, AppError> {
        let body = required_text("body", body)?;
        self.require_post(post_id).await?;

        let comment = CommentRepository::new(self.db)
            .create(post_id, user_id, None, body)
            .await?;

        tracing::info!(
            "User {} commented on post {} (comment {})",
            user_id,
            post_id,
            comment.id
        );

        Ok(comment)
    }

    /// Replies to a top-level comment of a post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created reply
    /// - `Err(AppError::BadRequest)` - Blank body, or the parent is itself a reply
    /// - `Err(AppError::NotFound)` - No such parent comment on that post
    /// - `Err(AppError::Conflict)` - The parent comment was deleted
    pub async fn create_reply(
        &self,
        post_id: i32,
        parent_id: i32,
        user_id: i32,
        body: &str,
    ) -> Result<Comment, AppError> {
        let body = required_text("body", body)?;

        let repo = CommentRepository::new(self.db);
        let parent = repo
            .find_by_id(parent_id)
            .await?
            .filter(|c| c.post_id == post_id)
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", parent_id)))?;

        if parent.is_reply() {
            return Err(AppError::BadRequest(
                "Replies can only be made to top-level comments".to_string(),
            ));
        }
        if parent.is_deleted() {
            return Err(AppError::Conflict(
                "Cannot reply to a deleted comment".to_string(),
            ));
        }

        let reply = repo.create(post_id, user_id, Some(parent_id), body).await?;

        tracing::info!(
            "User {} replied to comment {} on post {} (comment {})",
            user_id,
            parent_id,
            post_id,
            reply.id
        );

        Ok(reply)
    }

    /// Lists the comment threads of a post, newest top-level comment first.
    ///
    /// Replies are attached oldest first when `expand.replies` is set, authors when
    /// `expand.user` is set.
    ///
    /// # Returns
    /// - `Ok(Vec<CommentThread>)` - One thread per top-level comment
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn list_by_post(
        &self,
        post_id: i32,
        expand: CommentExpand,
    ) -> Result<Vec<CommentThread>, AppError> {
        self.require_post(post_id).await?;

        let repo = CommentRepository::new(self.db);
        let roots = repo.list_roots(post_id).await?;

        let mut replies: HashMap<i32, Vec<Comment>> = HashMap::new();
        if expand.replies {
            let parent_ids: Vec<i32> = roots
                .iter()
                .filter(|c| !c.is_deleted())
                .map(|c| c.id)
                .collect();
            for reply in repo.list_replies(&parent_ids).await? {
                if let Some(parent_id) = reply.parent_comment_id {
                    replies.entry(parent_id).or_default().push(reply);
                }
            }
        }

        let mut authors = HashMap::new();
        if expand.user {
            let mut user_ids: Vec<i32> = roots
                .iter()
                .chain(replies.values().flatten())
                .map(|c| c.user_id)
                .collect();
            user_ids.sort_unstable();
            user_ids.dedup();

            authors = UserRepository::new(self.db)
                .find_by_ids(&user_ids)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect();
        }

        let thread = |comment: Comment| {
            let mut thread = CommentThread::new(comment);
            thread.author = authors.get(&thread.comment.user_id).cloned();
            thread
        };

        Ok(roots
            .into_iter()
            .map(|root| {
                let children = replies.remove(&root.id).unwrap_or_default();
                let mut root = thread(root);
                root.replies = children.into_iter().map(&thread).collect();
                root
            })
            .collect())
    }

    /// Deletes a comment written by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Comment marked as deleted
    /// - `Err(AppError::NotFound)` - No live comment with that id on that post
    /// - `Err(AppError::Forbidden)` - The comment was written by someone else
    pub async fn delete(
        &self,
        post_id: i32,
        comment_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.post_id == post_id && !c.is_deleted())
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", comment_id)))?;
        if comment.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the author can delete this comment".to_string(),
            ));
        }

        if !repo.soft_delete(comment_id, user_id).await? {
            return Err(AppError::NotFound(format!("Comment {} not found", comment_id)));
        }

        tracing::info!("User {} deleted comment {}", user_id, comment_id);

        Ok(())
    }

    async fn require_post(&self, post_id: i32) -> Result<(), AppError> {
        PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
    }
}
