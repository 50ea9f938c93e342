use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260902_000003_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(PostApplication::Id))
                    .col(integer(PostApplication::PostId))
                    .col(integer(PostApplication::ApplicantId))
                    .col(string(PostApplication::Status).default("pending"))
                    .col(text(PostApplication::Message).default(""))
                    .col(
                        timestamp_with_time_zone(PostApplication::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PostApplication::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_application_post_id")
                            .from(PostApplication::Table, PostApplication::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_application_applicant_id")
                            .from(PostApplication::Table, PostApplication::ApplicantId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per user per post.
        manager
            .create_index(
                Index::create()
                    .name("idx_post_application_post_applicant")
                    .table(PostApplication::Table)
                    .col(PostApplication::PostId)
                    .col(PostApplication::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostApplication {
    Table,
    Id,
    PostId,
    ApplicantId,
    Status,
    Message,
    CreatedAt,
    UpdatedAt,
}
