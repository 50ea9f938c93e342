use crate::server::{
    error::AppError,
    model::{
        filter::PostFilter,
        post::{
            CreatePostParams, ExpandSet, LicenseLevel, PostAssociations, PostCategory,
            PostStatus, UpdatePostParams,
        },
    },
    service::post::PostService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::post::PostFactory};

mod write;

/// Minimal valid create parameters for a post owned by `user_id`.
fn create_params(user_id: i32) -> CreatePostParams {
    CreatePostParams {
        user_id,
        title: "Daytona 24 team".to_string(),
        body: "Need a night stint driver".to_string(),
        event_id: None,
        series_id: None,
        car_class_id: None,
        track_id: None,
        category: PostCategory::SportsCar,
        min_license_level: LicenseLevel::C,
        min_irating: 2000,
        timezone: "UTC".to_string(),
        event_start_at: None,
        slots_total: 3,
        status: PostStatus::Open,
        is_public: true,
        contact_hint: String::new(),
        associations: PostAssociations {
            categories: vec![PostCategory::SportsCar],
            ..Default::default()
        },
    }
}
