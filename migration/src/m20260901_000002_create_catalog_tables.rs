use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(pk_auto(Series::Id))
                    .col(string(Series::Name))
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(CarClass::Table)
                    .if_not_exists()
                    .col(pk_auto(CarClass::Id))
                    .col(string(CarClass::Name))
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string(Car::Name))
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(pk_auto(Track::Id))
                    .col(string(Track::Name))
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Language::Table)
                    .if_not_exists()
                    .col(string(Language::Code).primary_key())
                    .col(string(Language::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Language::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CarClass::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Series {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum CarClass {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Track {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Language {
    Table,
    Code,
    Name,
}
