//! Catalog domain models.
//!
//! Series, car classes, cars, tracks and events share the same `(id, name)` shape and are
//! represented by [`CatalogItem`]; languages are keyed by code instead.

use crate::model::catalog::{CatalogItemDto, LanguageDto};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
}

impl CatalogItem {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }

    pub fn into_dto(self) -> CatalogItemDto {
        CatalogItemDto {
            id: self.id,
            name: self.name,
        }
    }
}

impl From<entity::series::Model> for CatalogItem {
    fn from(model: entity::series::Model) -> Self {
        Self::new(model.id, model.name)
    }
}

impl From<entity::car_class::Model> for CatalogItem {
    fn from(model: entity::car_class::Model) -> Self {
        Self::new(model.id, model.name)
    }
}

impl From<entity::car::Model> for CatalogItem {
    fn from(model: entity::car::Model) -> Self {
        Self::new(model.id, model.name)
    }
}

impl From<entity::track::Model> for CatalogItem {
    fn from(model: entity::track::Model) -> Self {
        Self::new(model.id, model.name)
    }
}

impl From<entity::event::Model> for CatalogItem {
    fn from(model: entity::event::Model) -> Self {
        Self::new(model.id, model.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn into_dto(self) -> LanguageDto {
        LanguageDto {
            code: self.code,
            name: self.name,
        }
    }
}

impl From<entity::language::Model> for Language {
    fn from(model: entity::language::Model) -> Self {
        Self {
            code: model.code,
            name: model.name,
        }
    }
}

/// The catalogs sharing the `(id, name)` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Series,
    CarClass,
    Car,
    Track,
    Event,
}
