//! Catalog lookups.
//!
//! Catalog tables are read-only for the application. Lists are ordered by name; batch
//! lookups return rows in no particular order and silently skip unknown ids.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::catalog::{CatalogItem, CatalogKind, Language};

pub struct CatalogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every entry of a catalog ordered by name.
    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, DbErr> {
        use entity::{car, car_class, event, series, track};

        Ok(match kind {
            CatalogKind::Series => {
                into_items(self.all_by_name::<series::Entity>(series::Column::Name).await?)
            }
            CatalogKind::CarClass => {
                into_items(self.all_by_name::<car_class::Entity>(car_class::Column::Name).await?)
            }
            CatalogKind::Car => {
                into_items(self.all_by_name::<car::Entity>(car::Column::Name).await?)
            }
            CatalogKind::Track => {
                into_items(self.all_by_name::<track::Entity>(track::Column::Name).await?)
            }
            CatalogKind::Event => {
                into_items(self.all_by_name::<event::Entity>(event::Column::Name).await?)
            }
        })
    }

    /// Fetches the catalog entries with the given ids.
    ///
    /// # Arguments
    /// - `kind` - Catalog to read
    /// - `ids` - Ids to look up; duplicates and unknown ids are fine
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogItem>)` - Entries that exist, unordered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ids(
        &self,
        kind: CatalogKind,
        ids: &[i32],
    ) -> Result<Vec<CatalogItem>, DbErr> {
        use entity::{car, car_class, event, series, track};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(match kind {
            CatalogKind::Series => {
                into_items(self.all_in::<series::Entity>(series::Column::Id, ids).await?)
            }
            CatalogKind::CarClass => {
                into_items(self.all_in::<car_class::Entity>(car_class::Column::Id, ids).await?)
            }
            CatalogKind::Car => {
                into_items(self.all_in::<car::Entity>(car::Column::Id, ids).await?)
            }
            CatalogKind::Track => {
                into_items(self.all_in::<track::Entity>(track::Column::Id, ids).await?)
            }
            CatalogKind::Event => {
                into_items(self.all_in::<event::Entity>(event::Column::Id, ids).await?)
            }
        })
    }

    /// Lists every language ordered by name.
    pub async fn languages(&self) -> Result<Vec<Language>, DbErr> {
        let languages = self
            .all_by_name::<entity::language::Entity>(entity::language::Column::Name)
            .await?;

        Ok(languages.into_iter().map(Language::from).collect())
    }

    /// Fetches the languages with the given codes, skipping unknown codes.
    pub async fn languages_by_codes(&self, codes: &[String]) -> Result<Vec<Language>, DbErr> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let languages = entity::prelude::Language::find()
            .filter(entity::language::Column::Code.is_in(codes.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(languages.into_iter().map(Language::from).collect())
    }

    async fn all_by_name<E: EntityTrait>(&self, name: E::Column) -> Result<Vec<E::Model>, DbErr> {
        E::find().order_by_asc(name).all(self.db).await
    }

    async fn all_in<E: EntityTrait>(
        &self,
        id: E::Column,
        ids: &[i32],
    ) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}

fn into_items<M: Into<CatalogItem>>(models: Vec<M>) -> Vec<CatalogItem> {
    models.into_iter().map(Into::into).collect()
}
