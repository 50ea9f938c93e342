//! Team domain models.
//!
//! A team is not stored on its own. It is the owner of a post plus every user whose
//! application to that post was accepted.

use chrono::{DateTime, Utc};

use crate::{
    model::team::{MyTeamDto, TeamDto, TeamMemberDto, TeamMessageDto},
    server::model::user::User,
};

/// Most messages returned by one chat read.
pub const MESSAGE_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Owner,
    Member,
}

impl TeamRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub user: User,
    pub role: TeamRole,
    /// Post creation for the owner, acceptance time for members.
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            user_id: self.user.id,
            name: self.user.name,
            avatar: self.user.avatar,
            role: self.role.as_str().to_string(),
            joined_at: self.joined_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub post_id: i32,
    pub title: String,
    pub members: Vec<TeamMember>,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            post_id: self.post_id,
            title: self.title,
            members: self.members.into_iter().map(TeamMember::into_dto).collect(),
        }
    }
}

/// A team the current user belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct MyTeam {
    pub post_id: i32,
    pub title: String,
    pub role: TeamRole,
}

impl MyTeam {
    pub fn into_dto(self) -> MyTeamDto {
        MyTeamDto {
            post_id: self.post_id,
            title: self.title,
            role: self.role.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMessage {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    /// Display name of the author, empty if the user no longer exists.
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl TeamMessage {
    pub fn from_entity(
        entity: entity::team_message::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            user_id: entity.user_id,
            author_name: author.map(|u| u.name).unwrap_or_default(),
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TeamMessageDto {
        TeamMessageDto {
            id: self.id,
            post_id: self.post_id,
            user_id: self.user_id,
            name: self.author_name,
            body: self.body,
            created_at: self.created_at,
        }
    }
}
