use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workshop::Table)
                    .if_not_exists()
                    .col(pk_auto(Workshop::Id))
                    .col(string(Workshop::Title))
                    .col(text(Workshop::Description))
                    .col(string_null(Workshop::Image))
                    .col(timestamp_with_time_zone(Workshop::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workshop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workshop {
    Table,
    Id,
    Title,
    Description,
    Image,
    CreatedAt,
}
