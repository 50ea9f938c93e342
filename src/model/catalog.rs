use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A series, car class, car, track or event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CatalogItemDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LanguageDto {
    pub code: String,
    pub name: String,
}
