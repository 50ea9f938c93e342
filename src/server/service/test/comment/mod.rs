use crate::server::{
    error::AppError,
    model::comment::{CommentExpand, DELETED_BODY},
    service::comment::CommentService,
};
use test_utils::{builder::TestBuilder, factory, factory::comment::CommentFactory};

mod list;
mod write;
