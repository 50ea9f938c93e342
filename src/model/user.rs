use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
}

/// Public view of a user shown next to their comments, team membership and messages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub avatar: Option<String>,
}
