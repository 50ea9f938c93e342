use crate::server::{
    error::AppError, model::application::ApplicationStatus,
    service::application::ApplicationService,
};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{post::PostFactory, post_application::PostApplicationFactory},
};

mod review;
