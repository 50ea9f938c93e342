use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamMemberDto {
    pub user_id: i32,
    pub name: String,
    pub avatar: Option<String>,
    /// `owner` or `member`.
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// The team of a post: its owner followed by the accepted applicants.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamDto {
    pub post_id: i32,
    pub title: String,
    pub members: Vec<TeamMemberDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MyTeamDto {
    pub post_id: i32,
    pub title: String,
    /// `owner` or `member`.
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTeamMessageDto {
    pub body: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamMessageDto {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    /// Display name of the author.
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
