use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub body: String,
}

/// A comment on a post.
///
/// Deleted comments keep their place in the thread with the body replaced by `[deleted]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i32>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<CommentIncludedDto>,
}

/// Related data resolved on request through `?expand=user,replies`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct CommentIncludedDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummaryDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub replies: Vec<CommentDto>,
}
