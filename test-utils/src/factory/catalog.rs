//! Catalog factories.
//!
//! Catalog rows carry nothing but a name, so each table gets a single `create_*` function
//! rather than a builder.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_series(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::series::Model, DbErr> {
    entity::series::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_car_class(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::car_class::Model, DbErr> {
    entity::car_class::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_car(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::car::Model, DbErr> {
    entity::car::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_track(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::track::Model, DbErr> {
    entity::track::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_event(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::event::Model, DbErr> {
    entity::event::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a language keyed by `code`.
pub async fn create_language(
    db: &DatabaseConnection,
    code: impl Into<String>,
    name: impl Into<String>,
) -> Result<entity::language::Model, DbErr> {
    entity::language::ActiveModel {
        code: ActiveValue::Set(code.into()),
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
