use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000002_create_catalog_tables::{Car, CarClass, Language, Series, Track},
    m20260902_000003_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostCategory::Table)
                    .if_not_exists()
                    .col(integer(PostCategory::PostId))
                    .col(string(PostCategory::Category))
                    .primary_key(
                        Index::create()
                            .col(PostCategory::PostId)
                            .col(PostCategory::Category),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_category_post_id")
                            .from(PostCategory::Table, PostCategory::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostSeries::Table)
                    .if_not_exists()
                    .col(integer(PostSeries::PostId))
                    .col(integer(PostSeries::SeriesId))
                    .primary_key(
                        Index::create()
                            .col(PostSeries::PostId)
                            .col(PostSeries::SeriesId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_series_post_id")
                            .from(PostSeries::Table, PostSeries::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_series_series_id")
                            .from(PostSeries::Table, PostSeries::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostCarClass::Table)
                    .if_not_exists()
                    .col(integer(PostCarClass::PostId))
                    .col(integer(PostCarClass::CarClassId))
                    .primary_key(
                        Index::create()
                            .col(PostCarClass::PostId)
                            .col(PostCarClass::CarClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_car_class_post_id")
                            .from(PostCarClass::Table, PostCarClass::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_car_class_car_class_id")
                            .from(PostCarClass::Table, PostCarClass::CarClassId)
                            .to(CarClass::Table, CarClass::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostCar::Table)
                    .if_not_exists()
                    .col(integer(PostCar::PostId))
                    .col(integer(PostCar::CarId))
                    .primary_key(Index::create().col(PostCar::PostId).col(PostCar::CarId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_car_post_id")
                            .from(PostCar::Table, PostCar::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_car_car_id")
                            .from(PostCar::Table, PostCar::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostTrack::Table)
                    .if_not_exists()
                    .col(integer(PostTrack::PostId))
                    .col(integer(PostTrack::TrackId))
                    .primary_key(
                        Index::create()
                            .col(PostTrack::PostId)
                            .col(PostTrack::TrackId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_track_post_id")
                            .from(PostTrack::Table, PostTrack::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_track_track_id")
                            .from(PostTrack::Table, PostTrack::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostLanguage::Table)
                    .if_not_exists()
                    .col(integer(PostLanguage::PostId))
                    .col(string(PostLanguage::LanguageCode))
                    .primary_key(
                        Index::create()
                            .col(PostLanguage::PostId)
                            .col(PostLanguage::LanguageCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_language_post_id")
                            .from(PostLanguage::Table, PostLanguage::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_language_language_code")
                            .from(PostLanguage::Table, PostLanguage::LanguageCode)
                            .to(Language::Table, Language::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostLanguage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostTrack::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostCar::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostCarClass::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostSeries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostCategory {
    Table,
    PostId,
    Category,
}

#[derive(DeriveIden)]
pub enum PostSeries {
    Table,
    PostId,
    SeriesId,
}

#[derive(DeriveIden)]
pub enum PostCarClass {
    Table,
    PostId,
    CarClassId,
}

#[derive(DeriveIden)]
pub enum PostCar {
    Table,
    PostId,
    CarId,
}

#[derive(DeriveIden)]
pub enum PostTrack {
    Table,
    PostId,
    TrackId,
}

#[derive(DeriveIden)]
pub enum PostLanguage {
    Table,
    PostId,
    LanguageCode,
}
