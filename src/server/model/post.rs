//! Post domain models and parameters.
//!
//! Covers the post row itself, its six association sets, the parameter types for create and
//! update, and the assembled result returned by get and search.

use chrono::{DateTime, Utc};

use crate::{
    model::post::{PostDto, PostIncludedDto, PostSearchDto},
    server::{
        error::internal::InternalError,
        model::catalog::{CatalogItem, Language},
    },
};

/// Racing discipline a post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostCategory {
    SportsCar,
    Formula,
    Oval,
    DirtRoad,
    DirtOval,
}

impl PostCategory {
    pub const ALL: [Self; 5] = [
        Self::SportsCar,
        Self::Formula,
        Self::Oval,
        Self::DirtRoad,
        Self::DirtOval,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SportsCar => "sports_car",
            Self::Formula => "formula",
            Self::Oval => "oval",
            Self::DirtRoad => "dirt_road",
            Self::DirtOval => "dirt_oval",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostStatus {
    Open,
    Filled,
    Closed,
    Cancelled,
}

impl PostStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::Filled, Self::Closed, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Filled => "filled",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// iRacing license class, ordered from rookie to pro.
///
/// Declaration order is the ordinal order, so the derived `Ord` compares licenses by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LicenseLevel {
    R,
    D,
    C,
    B,
    A,
    P,
}

impl LicenseLevel {
    pub const ALL: [Self; 6] = [Self::R, Self::D, Self::C, Self::B, Self::A, Self::P];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::P => "P",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }

    /// Rank of the license, `R` = 0 through `P` = 5.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Every level ranked at or above `self`, lowest first.
    ///
    /// A minimum-license filter is compiled into membership in this set.
    pub fn at_or_above(self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|level| level.ordinal() >= self.ordinal())
            .collect()
    }
}

/// Column a post search is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    EventStartAt,
    MinIrating,
}

impl SortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created_at" => Some(Self::CreatedAt),
            "event_start_at" => Some(Self::EventStartAt),
            "min_irating" => Some(Self::MinIrating),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A post row with its enum columns parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    /// Legacy single category; the first category the post was created or updated with.
    pub category: PostCategory,
    pub min_license_level: LicenseLevel,
    pub min_irating: i32,
    pub timezone: String,
    pub event_start_at: Option<DateTime<Utc>>,
    pub slots_total: i32,
    pub status: PostStatus,
    pub is_public: bool,
    pub contact_hint: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Converts an entity model to a post domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Post)` - The converted post
    /// - `Err(InternalError::InvalidStoredValue)` - Category, license or status column holds
    ///   an unknown value
    pub fn from_entity(entity: entity::post::Model) -> Result<Self, InternalError> {
        let category =
            PostCategory::parse(&entity.category).ok_or(InternalError::InvalidStoredValue {
                column: "post.category",
                value: entity.category.clone(),
            })?;
        let min_license_level = LicenseLevel::parse(&entity.min_license_level).ok_or(
            InternalError::InvalidStoredValue {
                column: "post.min_license_level",
                value: entity.min_license_level.clone(),
            },
        )?;
        let status = PostStatus::parse(&entity.status).ok_or(InternalError::InvalidStoredValue {
            column: "post.status",
            value: entity.status.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            body: entity.body,
            event_id: entity.event_id,
            series_id: entity.series_id,
            car_class_id: entity.car_class_id,
            track_id: entity.track_id,
            category,
            min_license_level,
            min_irating: entity.min_irating,
            timezone: entity.timezone,
            event_start_at: entity.event_start_at,
            slots_total: entity.slots_total,
            status,
            is_public: entity.is_public,
            contact_hint: entity.contact_hint,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// The six multi-valued sets attached to a post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostAssociations {
    pub categories: Vec<PostCategory>,
    pub series_ids: Vec<i32>,
    pub car_class_ids: Vec<i32>,
    pub car_ids: Vec<i32>,
    pub track_ids: Vec<i32>,
    pub language_codes: Vec<String>,
}

/// Parameters for creating a post together with its association sets.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    pub category: PostCategory,
    pub min_license_level: LicenseLevel,
    pub min_irating: i32,
    pub timezone: String,
    pub event_start_at: Option<DateTime<Utc>>,
    pub slots_total: i32,
    pub status: PostStatus,
    pub is_public: bool,
    pub contact_hint: String,
    pub associations: PostAssociations,
}

/// Parameters for a partial post update.
///
/// `None` leaves a column or association set untouched. `Some(vec![])` clears the set.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    pub category: Option<PostCategory>,
    pub min_license_level: Option<LicenseLevel>,
    pub min_irating: Option<i32>,
    pub timezone: Option<String>,
    pub event_start_at: Option<DateTime<Utc>>,
    pub slots_total: Option<i32>,
    pub status: Option<PostStatus>,
    pub is_public: Option<bool>,
    pub contact_hint: Option<String>,
    pub categories: Option<Vec<PostCategory>>,
    pub series_ids: Option<Vec<i32>>,
    pub car_class_ids: Option<Vec<i32>>,
    pub car_ids: Option<Vec<i32>>,
    pub track_ids: Option<Vec<i32>>,
    pub language_codes: Option<Vec<String>>,
}

/// Related entities a caller asked to have resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandSet {
    pub event: bool,
    pub series: bool,
    pub car_class: bool,
    pub track: bool,
    pub cars: bool,
    pub languages: bool,
}

impl ExpandSet {
    /// Parses a comma separated list such as `event,cars`. Unknown names are ignored.
    pub fn parse(list: &str) -> Self {
        let mut expand = Self::default();
        for name in list.split(',').map(str::trim) {
            match name {
                "event" => expand.event = true,
                "series" => expand.series = true,
                "car_class" => expand.car_class = true,
                "track" => expand.track = true,
                "cars" => expand.cars = true,
                "languages" => expand.languages = true,
                _ => {}
            }
        }
        expand
    }

    pub fn all() -> Self {
        Self {
            event: true,
            series: true,
            car_class: true,
            track: true,
            cars: true,
            languages: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolved related entities of one post.
///
/// Multi-valued lists follow the order of the post's association set; ids without a catalog
/// row are left out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostIncluded {
    pub event: Option<CatalogItem>,
    pub series: Option<CatalogItem>,
    pub car_class: Option<CatalogItem>,
    pub track: Option<CatalogItem>,
    pub all_series: Vec<CatalogItem>,
    pub car_classes: Vec<CatalogItem>,
    pub tracks: Vec<CatalogItem>,
    pub cars: Vec<CatalogItem>,
    pub languages: Vec<Language>,
}

impl PostIncluded {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn into_dto(self) -> PostIncludedDto {
        PostIncludedDto {
            event: self.event.map(CatalogItem::into_dto),
            series: self.series.map(CatalogItem::into_dto),
            car_class: self.car_class.map(CatalogItem::into_dto),
            track: self.track.map(CatalogItem::into_dto),
            all_series: self.all_series.into_iter().map(CatalogItem::into_dto).collect(),
            car_classes: self
                .car_classes
                .into_iter()
                .map(CatalogItem::into_dto)
                .collect(),
            tracks: self.tracks.into_iter().map(CatalogItem::into_dto).collect(),
            cars: self.cars.into_iter().map(CatalogItem::into_dto).collect(),
            languages: self.languages.into_iter().map(Language::into_dto).collect(),
        }
    }
}

/// A post with its association sets and, when requested, its resolved relations.
#[derive(Debug, Clone, PartialEq)]
pub struct PostResult {
    pub post: Post,
    pub associations: PostAssociations,
    /// `None` when nothing was expanded or nothing could be resolved.
    pub included: Option<PostIncluded>,
}

impl PostResult {
    pub fn into_dto(self) -> PostDto {
        let Self {
            post,
            associations,
            included,
        } = self;

        PostDto {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            body: post.body,
            event_id: post.event_id,
            series_id: post.series_id,
            car_class_id: post.car_class_id,
            track_id: post.track_id,
            category: post.category.as_str().to_string(),
            categories: associations
                .categories
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            series_ids: associations.series_ids,
            car_class_ids: associations.car_class_ids,
            car_ids: associations.car_ids,
            track_ids: associations.track_ids,
            language_codes: associations.language_codes,
            min_license_level: post.min_license_level.as_str().to_string(),
            min_irating: post.min_irating,
            timezone: post.timezone,
            event_start_at: post.event_start_at,
            slots_total: post.slots_total,
            status: post.status.as_str().to_string(),
            is_public: post.is_public,
            contact_hint: post.contact_hint,
            created_at: post.created_at,
            updated_at: post.updated_at,
            included: included.map(PostIncluded::into_dto),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub items: Vec<PostResult>,
    /// Number of posts matching the criteria, independent of `limit` and `offset`.
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl PostPage {
    pub fn into_dto(self) -> PostSearchDto {
        PostSearchDto {
            items: self.items.into_iter().map(PostResult::into_dto).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
