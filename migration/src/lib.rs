pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_catalog_tables;
mod m20260902_000003_create_post_table;
mod m20260902_000004_create_post_association_tables;
mod m20260910_000005_create_post_application_table;
mod m20260920_000006_create_comment_table;
mod m20260920_000007_create_team_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_catalog_tables::Migration),
            Box::new(m20260902_000003_create_post_table::Migration),
            Box::new(m20260902_000004_create_post_association_tables::Migration),
            Box::new(m20260910_000005_create_post_application_table::Migration),
            Box::new(m20260920_000006_create_comment_table::Migration),
            Box::new(m20260920_000007_create_team_message_table::Migration),
        ]
    }
}
