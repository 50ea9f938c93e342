//! Comment repository.
//!
//! Comments are soft deleted: deleting sets `deleted_at` and keeps the row, so a thread keeps
//! its shape. Hard deletes only happen through the post cascade.

use chrono::Utc;
use entity::comment;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment, a reply when `parent_comment_id` is set.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error, including an unknown post, user or parent
    pub async fn create(
        &self,
        post_id: i32,
        user_id: i32,
        parent_comment_id: Option<i32>,
        body: String,
    ) -> Result<Comment, DbErr> {
        let entity = comment::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            parent_comment_id: ActiveValue::Set(parent_comment_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = comment::Entity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Lists the top-level comments of a post, newest first, deleted ones included.
    pub async fn list_roots(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .filter(comment::Column::ParentCommentId.is_null())
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Lists the replies to the given comments, oldest first.
    ///
    /// Replies to a deleted comment are left out.
    ///
    /// # Arguments
    /// - `parent_ids` - Top-level comments to load the replies of
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Replies of every live parent, in one list
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_replies(&self, parent_ids: &[i32]) -> Result<Vec<Comment>, DbErr> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        let live_parents = Query::select()
            .column(comment::Column::Id)
            .from(comment::Entity)
            .and_where(comment::Column::Id.is_in(parent_ids.iter().copied()))
            .and_where(comment::Column::DeletedAt.is_null())
            .to_owned();

        let entities = comment::Entity::find()
            .filter(comment::Column::ParentCommentId.in_subquery(live_parents))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Marks a live comment written by `user_id` as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The comment was deleted
    /// - `Ok(false)` - No live comment with that id and author
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = comment::Entity::update_many()
            .col_expr(comment::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(comment::Column::Id.eq(id))
            .filter(comment::Column::UserId.eq(user_id))
            .filter(comment::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
