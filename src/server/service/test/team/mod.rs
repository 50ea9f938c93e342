use crate::server::{
    error::AppError,
    model::team::TeamRole,
    service::team::TeamService,
};
use test_utils::{
    builder::TestBuilder, factory, factory::post_application::PostApplicationFactory,
};

mod members;
