use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateApplicationDto {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateApplicationStatusDto {
    /// `accepted` or `rejected`.
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub post_id: i32,
    pub applicant_id: i32,
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
