//! Post search criteria.
//!
//! [`PostFilter`] is what a request supplies: enum-valued fields are still raw strings and
//! every field is optional. The validator turns it into [`PostSearchParams`], which the query
//! compiler consumes.

use chrono::{DateTime, Utc};

use crate::server::model::post::{
    LicenseLevel, PostCategory, PostStatus, SortDirection, SortField,
};

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Unvalidated search criteria.
///
/// Empty lists mean "no restriction" for that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    /// Substring matched against title and body.
    pub search: Option<String>,
    /// Restricts results to this owner and makes their private posts visible.
    pub user_id: Option<i32>,
    pub categories: Vec<String>,
    pub series_ids: Vec<i32>,
    pub car_class_ids: Vec<i32>,
    pub car_ids: Vec<i32>,
    pub track_ids: Vec<i32>,
    pub language_codes: Vec<String>,
    pub license_levels: Vec<String>,
    pub min_license_level: Option<String>,
    pub min_irating: Option<i32>,
    pub max_irating: Option<i32>,
    pub event_ids: Vec<i32>,
    pub has_event: Option<bool>,
    pub timezone: Option<String>,
    pub statuses: Vec<String>,
    pub event_start_from: Option<DateTime<Utc>>,
    pub event_start_to: Option<DateTime<Utc>>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Validated and normalized search criteria.
///
/// Strings are trimmed, blank optional strings are `None`, and `limit`/`offset` are already
/// clamped to their allowed ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSearchParams {
    pub search: Option<String>,
    pub user_id: Option<i32>,
    pub categories: Vec<PostCategory>,
    pub series_ids: Vec<i32>,
    pub car_class_ids: Vec<i32>,
    pub car_ids: Vec<i32>,
    pub track_ids: Vec<i32>,
    pub language_codes: Vec<String>,
    pub license_levels: Vec<LicenseLevel>,
    pub min_license_level: Option<LicenseLevel>,
    pub min_irating: Option<i32>,
    pub max_irating: Option<i32>,
    pub event_ids: Vec<i32>,
    pub has_event: Option<bool>,
    pub timezone: Option<String>,
    pub statuses: Vec<PostStatus>,
    pub event_start_from: Option<DateTime<Utc>>,
    pub event_start_to: Option<DateTime<Utc>>,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
    pub limit: u64,
    pub offset: u64,
}

impl Default for PostSearchParams {
    fn default() -> Self {
        Self {
            search: None,
            user_id: None,
            categories: Vec::new(),
            series_ids: Vec::new(),
            car_class_ids: Vec::new(),
            car_ids: Vec::new(),
            track_ids: Vec::new(),
            language_codes: Vec::new(),
            license_levels: Vec::new(),
            min_license_level: None,
            min_irating: None,
            max_irating: None,
            event_ids: Vec::new(),
            has_event: None,
            timezone: None,
            statuses: Vec::new(),
            event_start_from: None,
            event_start_to: None,
            sort_by: SortField::default(),
            sort_direction: SortDirection::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
