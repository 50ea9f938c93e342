use crate::server::{
    data::application::PostApplicationRepository, error::AppError,
    model::application::ApplicationStatus,
};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod update_status;
