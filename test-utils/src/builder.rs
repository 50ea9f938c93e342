use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// Tables are generated from SeaORM entities with the SQLite backend and created in the order
/// they were added, so referenced tables must be added before the tables pointing at them.
/// Indexes declared on the entities, such as composite unique keys, are created after all
/// tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_post_tables()
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table for `entity` along with the indexes declared on it.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds the catalog lookup tables: series, car class, car, track, event and language.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Series)
            .with_table(CarClass)
            .with_table(Car)
            .with_table(Track)
            .with_table(Event)
            .with_table(Language)
    }

    /// Adds every table a post needs: users, the catalog, the post table and its six
    /// association tables.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_post_tables().build().await?;
    /// ```
    pub fn with_post_tables(self) -> Self {
        self.with_table(User)
            .with_catalog_tables()
            .with_table(Post)
            .with_table(PostCategory)
            .with_table(PostSeries)
            .with_table(PostCarClass)
            .with_table(PostCar)
            .with_table(PostTrack)
            .with_table(PostLanguage)
    }

    /// Adds the post tables plus the post application table.
    pub fn with_application_tables(self) -> Self {
        self.with_post_tables().with_table(PostApplication)
    }

    /// Adds the post tables plus the comment table.
    pub fn with_comment_tables(self) -> Self {
        self.with_post_tables().with_table(Comment)
    }

    /// Adds the application tables plus the team message table.
    ///
    /// Team membership is derived from accepted applications, so both are needed.
    pub fn with_team_tables(self) -> Self {
        self.with_application_tables().with_table(TeamMessage)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the tables in place
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;
        context.with_indexes(self.indexes).await?;

        Ok(context)
    }
}
