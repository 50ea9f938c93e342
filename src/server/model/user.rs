//! User domain model.

use chrono::{DateTime, Utc};

use crate::model::user::{UserDto, UserSummaryDto};

/// A user known through Discord login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Local identifier, used as the owner of posts and applications.
    pub id: i32,
    /// Discord snowflake of the account, stored as a string.
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            avatar: entity.avatar,
            created_at: entity.created_at,
        }
    }

    pub fn to_summary_dto(&self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            discord_id: self.discord_id,
            name: self.name,
            avatar: self.avatar,
        }
    }
}

/// Parameters for creating or refreshing a user after a Discord login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
}
