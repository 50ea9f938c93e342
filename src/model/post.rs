use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::{CatalogItemDto, LanguageDto};

fn default_is_public() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    /// Legacy single category, only used when `categories` is empty.
    pub category: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Defaults to `R`.
    pub min_license_level: Option<String>,
    #[serde(default)]
    pub min_irating: i32,
    #[serde(default)]
    pub timezone: String,
    pub event_start_at: Option<DateTime<Utc>>,
    pub slots_total: i32,
    /// Defaults to `open`.
    pub status: Option<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default)]
    pub contact_hint: String,
    #[serde(default)]
    pub series_ids: Vec<i32>,
    #[serde(default)]
    pub car_class_ids: Vec<i32>,
    #[serde(default)]
    pub car_ids: Vec<i32>,
    #[serde(default)]
    pub track_ids: Vec<i32>,
    #[serde(default)]
    pub language_codes: Vec<String>,
}

/// Partial update of a post.
///
/// Omitted or `null` fields keep their stored value. For the association lists an empty list
/// clears the stored set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub body: Option<String>,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    pub category: Option<String>,
    pub categories: Option<Vec<String>>,
    pub min_license_level: Option<String>,
    pub min_irating: Option<i32>,
    pub timezone: Option<String>,
    pub event_start_at: Option<DateTime<Utc>>,
    pub slots_total: Option<i32>,
    pub status: Option<String>,
    pub is_public: Option<bool>,
    pub contact_hint: Option<String>,
    pub series_ids: Option<Vec<i32>>,
    pub car_class_ids: Option<Vec<i32>>,
    pub car_ids: Option<Vec<i32>>,
    pub track_ids: Option<Vec<i32>>,
    pub language_codes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    pub category: String,
    pub categories: Vec<String>,
    pub series_ids: Vec<i32>,
    pub car_class_ids: Vec<i32>,
    pub car_ids: Vec<i32>,
    pub track_ids: Vec<i32>,
    pub language_codes: Vec<String>,
    pub min_license_level: String,
    pub min_irating: i32,
    pub timezone: String,
    pub event_start_at: Option<DateTime<Utc>>,
    pub slots_total: i32,
    pub status: String,
    pub is_public: bool,
    pub contact_hint: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<PostIncludedDto>,
}

/// Related entities resolved on request through `?expand=`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct PostIncludedDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_class: Option<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_series: Vec<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub car_classes: Vec<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cars: Vec<CatalogItemDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PostSearchDto {
    pub items: Vec<PostDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}
