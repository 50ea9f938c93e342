//! Post service.
//!
//! Search runs validate, compile, execute, assemble. Writes check ownership and run each
//! create or update in a single transaction covering the post row and every association set
//! it replaces.

pub mod assemble;
pub mod validate;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::post::{search::PostSearchQuery, PostRepository},
    error::{internal::InternalError, AppError},
    model::{
        filter::PostFilter,
        post::{CreatePostParams, ExpandSet, PostPage, PostResult, UpdatePostParams},
    },
    service::post::{assemble::PostAssembler, validate::validate_filter},
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches posts.
    ///
    /// # Arguments
    /// - `filter` - Raw search criteria
    /// - `expand` - Relations to resolve for every returned post
    ///
    /// # Returns
    /// - `Ok(PostPage)` - Page of results with the total match count and the applied window
    /// - `Err(AppError::FilterErr)` - Criteria rejected before any query ran
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        filter: PostFilter,
        expand: ExpandSet,
    ) -> Result<PostPage, AppError> {
        let params = validate_filter(filter)?;
        let query = PostSearchQuery::compile(&params);

        let (rows, total) = PostRepository::new(self.db).search(&query).await?;
        let items = PostAssembler::new(self.db).assemble(rows, expand).await?;

        Ok(PostPage {
            items,
            total,
            limit: query.limit(),
            offset: query.offset(),
        })
    }

    /// Searches the posts of one owner, including private posts of any status.
    pub async fn search_mine(
        &self,
        user_id: i32,
        filter: PostFilter,
        expand: ExpandSet,
    ) -> Result<PostPage, AppError> {
        self.search(
            PostFilter {
                user_id: Some(user_id),
                ..filter
            },
            expand,
        )
        .await
    }

    /// Gets a post by id.
    ///
    /// # Returns
    /// - `Ok(Some(PostResult))` - Post found
    /// - `Ok(None)` - No post with that id
    /// - `Err(AppError)` - Database error or unknown stored value
    pub async fn get_by_id(
        &self,
        id: i32,
        expand: ExpandSet,
    ) -> Result<Option<PostResult>, AppError> {
        let Some(row) = PostRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(
            PostAssembler::new(self.db).assemble_one(row, expand).await?,
        ))
    }

    /// Creates a post with its association sets in one transaction.
    ///
    /// # Returns
    /// - `Ok(PostResult)` - The stored post as read back after commit
    /// - `Err(AppError::DbErr)` - Any write failed; nothing was stored
    pub async fn create(&self, params: CreatePostParams) -> Result<PostResult, AppError> {
        let user_id = params.user_id;

        let txn = self.db.begin().await?;
        let post = PostRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!("User {} created post {}", user_id, post.id);

        self.reload(post.id).await
    }

    /// Updates a post owned by `user_id` in one transaction.
    ///
    /// # Returns
    /// - `Ok(PostResult)` - The updated post
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - The post belongs to someone else
    /// - `Err(AppError::DbErr)` - Any write failed; nothing was changed
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdatePostParams,
    ) -> Result<PostResult, AppError> {
        let post_id = params.id;

        let txn = self.db.begin().await?;
        let repo = PostRepository::new(&txn);

        let existing = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;
        if existing.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the owner can edit this post".to_string(),
            ));
        }

        repo.update(params).await?;
        txn.commit().await?;

        tracing::info!("User {} updated post {}", user_id, post_id);

        self.reload(post_id).await
    }

    /// Deletes a post owned by `user_id`.
    ///
    /// Association rows and applications are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - The post belongs to someone else
    pub async fn delete(&self, user_id: i32, post_id: i32) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);

        let existing = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;
        if existing.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the owner can delete this post".to_string(),
            ));
        }

        repo.delete(post_id).await?;

        tracing::info!("User {} deleted post {}", user_id, post_id);

        Ok(())
    }

    async fn reload(&self, post_id: i32) -> Result<PostResult, AppError> {
        self.get_by_id(post_id, ExpandSet::default())
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite(format!("post {}", post_id)).into())
    }
}
