use crate::server::data::team::TeamRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder, factory, factory::post_application::PostApplicationFactory,
};

mod members;
