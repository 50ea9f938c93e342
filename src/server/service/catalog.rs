use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::catalog::{CatalogItem, CatalogKind, Language},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a catalog ordered by name
    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, AppError> {
        Ok(CatalogRepository::new(self.db).list(kind).await?)
    }

    /// Lists all languages ordered by name
    pub async fn languages(&self) -> Result<Vec<Language>, AppError> {
        Ok(CatalogRepository::new(self.db).languages().await?)
    }
}
