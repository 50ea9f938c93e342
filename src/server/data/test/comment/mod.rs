use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::comment::CommentFactory};

mod list;
mod write;
