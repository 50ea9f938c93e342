use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// In-memory test environment.
///
/// Holds an SQLite `:memory:` database and an optional session stored in the same database.
/// Both are created on first access and live as long as the context. The in-memory pool has a
/// single connection, so everything a test does, including transactions opened by services,
/// sees one database.
#[derive(Default)]
pub struct TestContext {
    /// Database connection, set once `database()` has run.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the `tower_sessions` table of `db`, set once `session()` has run.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a context with neither a database nor a session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database connection, connecting to `sqlite::memory:` on first use.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection owned by this context
    /// - `Err(TestError::Database)` - Connection failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db.as_ref() {
            Some(db) => Ok(db),
            None => Err(TestError::Database(sea_orm::DbErr::Custom(
                "database connection missing".to_string(),
            ))),
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tables referenced by foreign keys must come first.
    ///
    /// # Arguments
    /// - `stmts` - Statements generated from SeaORM entities
    ///
    /// # Returns
    /// - `Ok(())` - Every table was created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the given indexes on the context's database.
    pub async fn with_indexes(&mut self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table and a fresh session on first use.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session owned by this context
    /// - `Err(TestError::Database)` - The database could not be opened
    /// - `Err(TestError::Session)` - The session table could not be created
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::Session(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            );
            self.session = Some(session);
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Session("session missing".to_string()))
    }

    /// Returns both the database and the session, initializing whichever is missing.
    ///
    /// Avoids holding the mutable borrow of `database()` while calling `session()`.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session("test context not initialized".to_string())),
        }
    }
}
