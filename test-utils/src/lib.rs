//! Teammate Test Utils
//!
//! Shared testing utilities for the teammate server. Tests build an in-memory SQLite database
//! whose tables are generated straight from the SeaORM entities (foreign keys and cascades
//! included), then populate it through the factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for users, catalog rows, posts and applications
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_post() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_post_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let post = factory::create_post(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
