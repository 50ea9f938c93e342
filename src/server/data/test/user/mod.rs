use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find;
mod upsert;
