//! Post application domain models.

use chrono::{DateTime, Utc};

use crate::{model::application::ApplicationDto, server::error::internal::InternalError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Accepted, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A user's request to join a post's team.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub post_id: i32,
    pub applicant_id: i32,
    pub status: ApplicationStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    pub fn from_entity(entity: entity::post_application::Model) -> Result<Self, InternalError> {
        let status =
            ApplicationStatus::parse(&entity.status).ok_or(InternalError::InvalidStoredValue {
                column: "post_application.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            post_id: entity.post_id,
            applicant_id: entity.applicant_id,
            status,
            message: entity.message,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            post_id: self.post_id,
            applicant_id: self.applicant_id,
            status: self.status.as_str().to_string(),
            message: self.message,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
