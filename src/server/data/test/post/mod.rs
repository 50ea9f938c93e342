use crate::server::{
    data::post::{
        association::PostAssociationRepository, search::PostSearchQuery, PostRepository,
    },
    model::{
        filter::PostSearchParams,
        post::{
            CreatePostParams, LicenseLevel, PostAssociations, PostCategory, PostStatus,
            SortDirection, SortField, UpdatePostParams,
        },
    },
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::post::PostFactory};

mod association;
mod search;

/// Compiles `params` and runs the search, returning the page ids and the total.
async fn search_ids(
    db: &DatabaseConnection,
    params: PostSearchParams,
) -> Result<(Vec<i32>, u64), DbErr> {
    let (items, total) = PostRepository::new(db)
        .search(&PostSearchQuery::compile(&params))
        .await?;

    Ok((items.into_iter().map(|p| p.id).collect(), total))
}

/// Minimal valid create parameters for a post owned by `user_id`.
fn create_params(user_id: i32) -> CreatePostParams {
    CreatePostParams {
        user_id,
        title: "GT3 endurance crew".to_string(),
        body: "Looking for two drivers".to_string(),
        event_id: None,
        series_id: None,
        car_class_id: None,
        track_id: None,
        category: PostCategory::SportsCar,
        min_license_level: LicenseLevel::D,
        min_irating: 1500,
        timezone: "Europe/Berlin".to_string(),
        event_start_at: None,
        slots_total: 2,
        status: PostStatus::Open,
        is_public: true,
        contact_hint: "DM on Discord".to_string(),
        associations: PostAssociations {
            categories: vec![PostCategory::SportsCar],
            ..Default::default()
        },
    }
}

/// Counts the rows of all six association tables for a post.
async fn association_row_count(db: &DatabaseConnection, post_id: i32) -> Result<u64, DbErr> {
    use sea_orm::{ColumnTrait, QueryFilter};

    let mut total = 0;
    total += entity::prelude::PostCategory::find()
        .filter(entity::post_category::Column::PostId.eq(post_id))
        .count(db)
        .await?;
    total += entity::prelude::PostSeries::find()
        .filter(entity::post_series::Column::PostId.eq(post_id))
        .count(db)
        .await?;
    total += entity::prelude::PostCarClass::find()
        .filter(entity::post_car_class::Column::PostId.eq(post_id))
        .count(db)
        .await?;
    total += entity::prelude::PostCar::find()
        .filter(entity::post_car::Column::PostId.eq(post_id))
        .count(db)
        .await?;
    total += entity::prelude::PostTrack::find()
        .filter(entity::post_track::Column::PostId.eq(post_id))
        .count(db)
        .await?;
    total += entity::prelude::PostLanguage::find()
        .filter(entity::post_language::Column::PostId.eq(post_id))
        .count(db)
        .await?;

    Ok(total)
}
