//! Comment domain models.
//!
//! Threads are two levels deep: top-level comments and replies to them. A reply's
//! `parent_comment_id` always points at a top-level comment of the same post.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentIncludedDto},
    server::model::user::User,
};

/// Body shown in place of a deleted comment.
pub const DELETED_BODY: &str = "[deleted]";

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub parent_comment_id: Option<i32>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            user_id: entity.user_id,
            parent_comment_id: entity.parent_comment_id,
            body: entity.body,
            created_at: entity.created_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }
}

/// Related data a caller asked to have resolved for each comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentExpand {
    pub user: bool,
    pub replies: bool,
}

impl CommentExpand {
    /// Parses a comma separated list such as `user,replies`. Unknown names are ignored.
    pub fn parse(list: &str) -> Self {
        let mut expand = Self::default();
        for name in list.split(',').map(str::trim) {
            match name {
                "user" => expand.user = true,
                "replies" => expand.replies = true,
                _ => {}
            }
        }
        expand
    }
}

/// A comment with its resolved author and replies.
///
/// `author` is only set when the user expand was requested, `replies` only for top-level
/// comments when the replies expand was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub author: Option<User>,
    pub replies: Vec<CommentThread>,
}

impl CommentThread {
    pub fn new(comment: Comment) -> Self {
        Self {
            comment,
            author: None,
            replies: Vec::new(),
        }
    }

    pub fn into_dto(self) -> CommentDto {
        let comment = self.comment;
        let body = match comment.deleted_at {
            Some(_) => DELETED_BODY.to_string(),
            None => comment.body,
        };

        let included = CommentIncludedDto {
            user: self.author.as_ref().map(User::to_summary_dto),
            replies: self
                .replies
                .into_iter()
                .map(CommentThread::into_dto)
                .collect(),
        };
        let resolved = included.user.is_some() || !included.replies.is_empty();
        let included = resolved.then_some(included);

        CommentDto {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            parent_comment_id: comment.parent_comment_id,
            body,
            created_at: comment.created_at,
            deleted_at: comment.deleted_at,
            included,
        }
    }
}
