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
                    .table(TeamMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMessage::Id))
                    .col(integer(TeamMessage::PostId))
                    .col(integer(TeamMessage::UserId))
                    .col(text(TeamMessage::Body))
                    .col(
                        timestamp_with_time_zone(TeamMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_message_post_id")
                            .from(TeamMessage::Table, TeamMessage::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_message_user_id")
                            .from(TeamMessage::Table, TeamMessage::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Polling reads messages of one post by ascending id.
        manager
            .create_index(
                Index::create()
                    .name("idx_team_message_post_id")
                    .table(TeamMessage::Table)
                    .col(TeamMessage::PostId)
                    .col(TeamMessage::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMessage {
    Table,
    Id,
    PostId,
    UserId,
    Body,
    CreatedAt,
}
