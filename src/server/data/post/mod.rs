//! Post repository.
//!
//! Owns the `post` table and, through [`association::PostAssociationRepository`], the six
//! association tables. Create and update touch several tables and are meant to run on a
//! transaction handed in by the service.

pub mod association;
pub mod search;

use chrono::Utc;
use entity::post;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

use crate::server::{
    data::post::{association::PostAssociationRepository, search::PostSearchQuery},
    model::post::{CreatePostParams, UpdatePostParams},
};

/// Repository for posts and their association sets.
pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a post row followed by all of its association sets.
    ///
    /// Not atomic by itself; pass a transaction to get all-or-nothing behavior.
    ///
    /// # Arguments
    /// - `params` - Validated post fields and association sets
    ///
    /// # Returns
    /// - `Ok(post::Model)` - The inserted post row
    /// - `Err(DbErr)` - Database error, e.g. an association value without a catalog row
    pub async fn create(&self, params: CreatePostParams) -> Result<post::Model, DbErr> {
        let now = Utc::now();

        let post = post::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            event_id: ActiveValue::Set(params.event_id),
            series_id: ActiveValue::Set(params.series_id),
            car_class_id: ActiveValue::Set(params.car_class_id),
            track_id: ActiveValue::Set(params.track_id),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            min_license_level: ActiveValue::Set(params.min_license_level.as_str().to_string()),
            min_irating: ActiveValue::Set(params.min_irating),
            timezone: ActiveValue::Set(params.timezone),
            event_start_at: ActiveValue::Set(params.event_start_at),
            slots_total: ActiveValue::Set(params.slots_total),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            is_public: ActiveValue::Set(params.is_public),
            contact_hint: ActiveValue::Set(params.contact_hint),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PostAssociationRepository::new(self.db)
            .insert_all(post.id, &params.associations)
            .await?;

        Ok(post)
    }

    /// Finds a post row by id.
    ///
    /// # Returns
    /// - `Ok(Some(post::Model))` - Post found
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<post::Model>, DbErr> {
        post::Entity::find_by_id(id).one(self.db).await
    }

    /// Applies a partial update.
    ///
    /// Only fields set to `Some` are written; `updated_at` always advances. Each association
    /// set given as `Some` is replaced in full, an empty list clearing it. Sets left as `None`
    /// keep their stored rows.
    ///
    /// # Arguments
    /// - `params` - Post id plus the fields and sets to change
    ///
    /// # Returns
    /// - `Ok(post::Model)` - The updated post row
    /// - `Err(DbErr::RecordNotFound)` - No post with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdatePostParams) -> Result<post::Model, DbErr> {
        let existing = post::Entity::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("post {}", params.id)))?;

        let mut post: post::ActiveModel = existing.into();

        if let Some(title) = params.title {
            post.title = ActiveValue::Set(title);
        }
        if let Some(body) = params.body {
            post.body = ActiveValue::Set(body);
        }
        if let Some(event_id) = params.event_id {
            post.event_id = ActiveValue::Set(Some(event_id));
        }
        if let Some(series_id) = params.series_id {
            post.series_id = ActiveValue::Set(Some(series_id));
        }
        if let Some(car_class_id) = params.car_class_id {
            post.car_class_id = ActiveValue::Set(Some(car_class_id));
        }
        if let Some(track_id) = params.track_id {
            post.track_id = ActiveValue::Set(Some(track_id));
        }
        if let Some(category) = params.category {
            post.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(level) = params.min_license_level {
            post.min_license_level = ActiveValue::Set(level.as_str().to_string());
        }
        if let Some(min_irating) = params.min_irating {
            post.min_irating = ActiveValue::Set(min_irating);
        }
        if let Some(timezone) = params.timezone {
            post.timezone = ActiveValue::Set(timezone);
        }
        if let Some(event_start_at) = params.event_start_at {
            post.event_start_at = ActiveValue::Set(Some(event_start_at));
        }
        if let Some(slots_total) = params.slots_total {
            post.slots_total = ActiveValue::Set(slots_total);
        }
        if let Some(status) = params.status {
            post.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(is_public) = params.is_public {
            post.is_public = ActiveValue::Set(is_public);
        }
        if let Some(contact_hint) = params.contact_hint {
            post.contact_hint = ActiveValue::Set(contact_hint);
        }
        post.updated_at = ActiveValue::Set(Utc::now());

        let post = post.update(self.db).await?;

        let associations = PostAssociationRepository::new(self.db);
        if let Some(categories) = &params.categories {
            associations.replace_categories(post.id, categories).await?;
        }
        if let Some(series_ids) = &params.series_ids {
            associations.replace_series(post.id, series_ids).await?;
        }
        if let Some(car_class_ids) = &params.car_class_ids {
            associations.replace_car_classes(post.id, car_class_ids).await?;
        }
        if let Some(car_ids) = &params.car_ids {
            associations.replace_cars(post.id, car_ids).await?;
        }
        if let Some(track_ids) = &params.track_ids {
            associations.replace_tracks(post.id, track_ids).await?;
        }
        if let Some(language_codes) = &params.language_codes {
            associations.replace_languages(post.id, language_codes).await?;
        }

        Ok(post)
    }

    /// Deletes a post.
    ///
    /// Association rows and applications go with it through the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = post::Entity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Runs a compiled search.
    ///
    /// # Returns
    /// - `Ok((Vec<post::Model>, u64))` - The page of post rows and the total number of matches
    /// - `Err(DbErr)` - Database error during either query
    pub async fn search(&self, query: &PostSearchQuery) -> Result<(Vec<post::Model>, u64), DbErr> {
        let total = query.count_query().count(self.db).await?;
        let items = query.page_query().all(self.db).await?;

        Ok((items, total))
    }
}
