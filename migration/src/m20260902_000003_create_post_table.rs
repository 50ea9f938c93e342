use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User,
    m20260901_000002_create_catalog_tables::{CarClass, Event, Series, Track},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(integer(Post::UserId))
                    .col(string(Post::Title))
                    .col(text(Post::Body).default(""))
                    .col(integer_null(Post::EventId))
                    .col(integer_null(Post::SeriesId))
                    .col(integer_null(Post::CarClassId))
                    .col(integer_null(Post::TrackId))
                    .col(string(Post::Category))
                    .col(string(Post::MinLicenseLevel).default("R"))
                    .col(integer(Post::MinIrating).default(0))
                    .col(string(Post::Timezone).default(""))
                    .col(timestamp_with_time_zone_null(Post::EventStartAt))
                    .col(integer(Post::SlotsTotal))
                    .col(string(Post::Status).default("open"))
                    .col(boolean(Post::IsPublic).default(true))
                    .col(string(Post::ContactHint).default(""))
                    .col(
                        timestamp_with_time_zone(Post::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Post::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_user_id")
                            .from(Post::Table, Post::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_event_id")
                            .from(Post::Table, Post::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_series_id")
                            .from(Post::Table, Post::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_car_class_id")
                            .from(Post::Table, Post::CarClassId)
                            .to(CarClass::Table, CarClass::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_track_id")
                            .from(Post::Table, Post::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_status_created_at")
                    .table(Post::Table)
                    .col(Post::Status)
                    .col(Post::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_event_start_at")
                    .table(Post::Table)
                    .col(Post::EventStartAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    UserId,
    Title,
    Body,
    EventId,
    SeriesId,
    CarClassId,
    TrackId,
    Category,
    MinLicenseLevel,
    MinIrating,
    Timezone,
    EventStartAt,
    SlotsTotal,
    Status,
    IsPublic,
    ContactHint,
    CreatedAt,
    UpdatedAt,
}
