//! Post factory.
//!
//! Inserts the post row and every association set configured on the builder, the same shape
//! the post repository writes.

use crate::factory::helpers::{next_id, next_timestamp};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for test posts and their association rows.
///
/// Defaults: open, public, category `sports_car`, license `R`, iRating 0, 3 slots, no event,
/// and a `created_at` later than any previously created factory row.
///
/// # Example
///
/// ```rust,ignore
/// let post = PostFactory::new(&db, user.id)
///     .categories(["oval"])
///     .min_irating(2000)
///     .status("closed")
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    body: String,
    categories: Vec<String>,
    min_license_level: String,
    min_irating: i32,
    timezone: String,
    event_start_at: Option<DateTime<Utc>>,
    slots_total: i32,
    status: String,
    is_public: bool,
    event_id: Option<i32>,
    series_id: Option<i32>,
    car_class_id: Option<i32>,
    track_id: Option<i32>,
    created_at: DateTime<Utc>,
    series_ids: Vec<i32>,
    car_class_ids: Vec<i32>,
    car_ids: Vec<i32>,
    track_ids: Vec<i32>,
    language_codes: Vec<String>,
}

impl<'a> PostFactory<'a> {
    /// Creates a factory for a post owned by `user_id`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Post {}", id),
            body: String::new(),
            categories: vec!["sports_car".to_string()],
            min_license_level: "R".to_string(),
            min_irating: 0,
            timezone: "UTC".to_string(),
            event_start_at: None,
            slots_total: 3,
            status: "open".to_string(),
            is_public: true,
            event_id: None,
            series_id: None,
            car_class_id: None,
            track_id: None,
            created_at: next_timestamp(),
            series_ids: Vec::new(),
            car_class_ids: Vec::new(),
            car_ids: Vec::new(),
            track_ids: Vec::new(),
            language_codes: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the category set; the first entry also becomes the legacy `category` column.
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_license_level(mut self, level: impl Into<String>) -> Self {
        self.min_license_level = level.into();
        self
    }

    pub fn min_irating(mut self, min_irating: i32) -> Self {
        self.min_irating = min_irating;
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn event_start_at(mut self, event_start_at: DateTime<Utc>) -> Self {
        self.event_start_at = Some(event_start_at);
        self
    }

    pub fn slots_total(mut self, slots_total: i32) -> Self {
        self.slots_total = slots_total;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn event_id(mut self, event_id: i32) -> Self {
        self.event_id = Some(event_id);
        self
    }

    pub fn series_id(mut self, series_id: i32) -> Self {
        self.series_id = Some(series_id);
        self
    }

    pub fn car_class_id(mut self, car_class_id: i32) -> Self {
        self.car_class_id = Some(car_class_id);
        self
    }

    pub fn track_id(mut self, track_id: i32) -> Self {
        self.track_id = Some(track_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn series_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.series_ids = ids.into_iter().collect();
        self
    }

    pub fn car_class_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.car_class_ids = ids.into_iter().collect();
        self
    }

    pub fn car_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.car_ids = ids.into_iter().collect();
        self
    }

    pub fn track_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.track_ids = ids.into_iter().collect();
        self
    }

    pub fn language_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Inserts the post followed by its association rows.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post row
    /// - `Err(DbErr)` - Database error, e.g. an association id without a catalog row
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let category = self
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| "sports_car".to_string());

        let post = entity::post::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            event_id: ActiveValue::Set(self.event_id),
            series_id: ActiveValue::Set(self.series_id),
            car_class_id: ActiveValue::Set(self.car_class_id),
            track_id: ActiveValue::Set(self.track_id),
            category: ActiveValue::Set(category),
            min_license_level: ActiveValue::Set(self.min_license_level),
            min_irating: ActiveValue::Set(self.min_irating),
            timezone: ActiveValue::Set(self.timezone),
            event_start_at: ActiveValue::Set(self.event_start_at),
            slots_total: ActiveValue::Set(self.slots_total),
            status: ActiveValue::Set(self.status),
            is_public: ActiveValue::Set(self.is_public),
            contact_hint: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !self.categories.is_empty() {
            entity::prelude::PostCategory::insert_many(self.categories.into_iter().map(
                |category| entity::post_category::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    category: ActiveValue::Set(category),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        if !self.series_ids.is_empty() {
            entity::prelude::PostSeries::insert_many(self.series_ids.into_iter().map(|id| {
                entity::post_series::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    series_id: ActiveValue::Set(id),
                }
            }))
            .exec_without_returning(self.db)
            .await?;
        }

        if !self.car_class_ids.is_empty() {
            entity::prelude::PostCarClass::insert_many(self.car_class_ids.into_iter().map(
                |id| entity::post_car_class::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    car_class_id: ActiveValue::Set(id),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        if !self.car_ids.is_empty() {
            entity::prelude::PostCar::insert_many(self.car_ids.into_iter().map(|id| {
                entity::post_car::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    car_id: ActiveValue::Set(id),
                }
            }))
            .exec_without_returning(self.db)
            .await?;
        }

        if !self.track_ids.is_empty() {
            entity::prelude::PostTrack::insert_many(self.track_ids.into_iter().map(|id| {
                entity::post_track::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    track_id: ActiveValue::Set(id),
                }
            }))
            .exec_without_returning(self.db)
            .await?;
        }

        if !self.language_codes.is_empty() {
            entity::prelude::PostLanguage::insert_many(self.language_codes.into_iter().map(
                |code| entity::post_language::ActiveModel {
                    post_id: ActiveValue::Set(post.id),
                    language_code: ActiveValue::Set(code),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(post)
    }
}

/// Creates an open public post with default values owned by `user_id`.
pub async fn create_post(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, user_id).build().await
}
