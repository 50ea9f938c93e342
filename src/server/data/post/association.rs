//! Post association repository.
//!
//! Reads and writes the six association sets of a post: categories, series, car classes,
//! cars, tracks and languages. Each set lives in its own `(post_id, value)` table.
//!
//! Writes follow a replace-all policy: every replace deletes the stored set for the post and
//! inserts the new one. Callers run replacements inside a transaction so a failure part way
//! through never leaves a post with only some of its sets replaced.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use entity::{post_car, post_car_class, post_category, post_language, post_series, post_track};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::post::{PostAssociations, PostCategory};

/// Repository for the association sets of posts.
///
/// Generic over the connection so it can run on the pool or inside a transaction.
pub struct PostAssociationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostAssociationRepository<'a, C> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the association sets of every given post.
    ///
    /// Runs one query per association table regardless of how many posts are requested.
    /// Every requested id is present in the result, with empty sets when it has no rows.
    /// Values within a set are ordered ascending.
    ///
    /// # Arguments
    /// - `post_ids` - Ids of the posts to load
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, PostAssociations>)` - Sets keyed by post id
    /// - `Err(DbErr::Type)` - A stored category is not a known category
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_posts(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, PostAssociations>, DbErr> {
        let mut sets: HashMap<i32, PostAssociations> = post_ids
            .iter()
            .map(|id| (*id, PostAssociations::default()))
            .collect();

        if post_ids.is_empty() {
            return Ok(sets);
        }

        let ids = post_ids.iter().copied();

        let categories = post_category::Entity::find()
            .filter(post_category::Column::PostId.is_in(ids.clone()))
            .order_by_asc(post_category::Column::Category)
            .all(self.db)
            .await?;
        for row in categories {
            let category = PostCategory::parse(&row.category).ok_or_else(|| {
                DbErr::Type(format!(
                    "unknown category '{}' stored for post {}",
                    row.category, row.post_id
                ))
            })?;
            sets.entry(row.post_id).or_default().categories.push(category);
        }

        let series = post_series::Entity::find()
            .filter(post_series::Column::PostId.is_in(ids.clone()))
            .order_by_asc(post_series::Column::SeriesId)
            .all(self.db)
            .await?;
        for row in series {
            sets.entry(row.post_id).or_default().series_ids.push(row.series_id);
        }

        let car_classes = post_car_class::Entity::find()
            .filter(post_car_class::Column::PostId.is_in(ids.clone()))
            .order_by_asc(post_car_class::Column::CarClassId)
            .all(self.db)
            .await?;
        for row in car_classes {
            sets.entry(row.post_id).or_default().car_class_ids.push(row.car_class_id);
        }

        let cars = post_car::Entity::find()
            .filter(post_car::Column::PostId.is_in(ids.clone()))
            .order_by_asc(post_car::Column::CarId)
            .all(self.db)
            .await?;
        for row in cars {
            sets.entry(row.post_id).or_default().car_ids.push(row.car_id);
        }

        let tracks = post_track::Entity::find()
            .filter(post_track::Column::PostId.is_in(ids.clone()))
            .order_by_asc(post_track::Column::TrackId)
            .all(self.db)
            .await?;
        for row in tracks {
            sets.entry(row.post_id).or_default().track_ids.push(row.track_id);
        }

        let languages = post_language::Entity::find()
            .filter(post_language::Column::PostId.is_in(ids))
            .order_by_asc(post_language::Column::LanguageCode)
            .all(self.db)
            .await?;
        for row in languages {
            sets.entry(row.post_id)
                .or_default()
                .language_codes
                .push(row.language_code);
        }

        Ok(sets)
    }

    /// Loads the association sets of a single post.
    ///
    /// # Returns
    /// - `Ok(PostAssociations)` - Sets of the post, empty when it has none or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, post_id: i32) -> Result<PostAssociations, DbErr> {
        let mut sets = self.get_for_posts(&[post_id]).await?;

        Ok(sets.remove(&post_id).unwrap_or_default())
    }

    /// Inserts every set of a newly created post.
    ///
    /// # Arguments
    /// - `post_id` - Id of the post the sets belong to
    /// - `associations` - Sets to store; duplicates are collapsed
    ///
    /// # Returns
    /// - `Ok(())` - All rows inserted
    /// - `Err(DbErr)` - Database error, e.g. a value without a catalog row
    pub async fn insert_all(
        &self,
        post_id: i32,
        associations: &PostAssociations,
    ) -> Result<(), DbErr> {
        self.replace_categories(post_id, &associations.categories).await?;
        self.replace_series(post_id, &associations.series_ids).await?;
        self.replace_car_classes(post_id, &associations.car_class_ids).await?;
        self.replace_cars(post_id, &associations.car_ids).await?;
        self.replace_tracks(post_id, &associations.track_ids).await?;
        self.replace_languages(post_id, &associations.language_codes).await?;

        Ok(())
    }

    /// Replaces the category set of a post.
    ///
    /// An empty slice clears the set.
    pub async fn replace_categories(
        &self,
        post_id: i32,
        categories: &[PostCategory],
    ) -> Result<(), DbErr> {
        post_category::Entity::delete_many()
            .filter(post_category::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for category in dedup(categories) {
            post_category::Entity::insert(post_category::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                category: ActiveValue::Set(category.as_str().to_string()),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the series set of a post.
    pub async fn replace_series(&self, post_id: i32, series_ids: &[i32]) -> Result<(), DbErr> {
        post_series::Entity::delete_many()
            .filter(post_series::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for series_id in dedup(series_ids) {
            post_series::Entity::insert(post_series::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                series_id: ActiveValue::Set(series_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the car class set of a post.
    pub async fn replace_car_classes(
        &self,
        post_id: i32,
        car_class_ids: &[i32],
    ) -> Result<(), DbErr> {
        post_car_class::Entity::delete_many()
            .filter(post_car_class::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for car_class_id in dedup(car_class_ids) {
            post_car_class::Entity::insert(post_car_class::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                car_class_id: ActiveValue::Set(car_class_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the car set of a post.
    pub async fn replace_cars(&self, post_id: i32, car_ids: &[i32]) -> Result<(), DbErr> {
        post_car::Entity::delete_many()
            .filter(post_car::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for car_id in dedup(car_ids) {
            post_car::Entity::insert(post_car::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                car_id: ActiveValue::Set(car_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the track set of a post.
    pub async fn replace_tracks(&self, post_id: i32, track_ids: &[i32]) -> Result<(), DbErr> {
        post_track::Entity::delete_many()
            .filter(post_track::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for track_id in dedup(track_ids) {
            post_track::Entity::insert(post_track::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                track_id: ActiveValue::Set(track_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the language set of a post.
    pub async fn replace_languages(
        &self,
        post_id: i32,
        language_codes: &[String],
    ) -> Result<(), DbErr> {
        post_language::Entity::delete_many()
            .filter(post_language::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for language_code in dedup(language_codes) {
            post_language::Entity::insert(post_language::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                language_code: ActiveValue::Set(language_code),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }
}

/// Collapses duplicates, keeping the first occurrence of each value.
pub fn dedup<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();

    values
        .iter()
        .filter(|value| seen.insert((*value).clone()))
        .cloned()
        .collect()
}
