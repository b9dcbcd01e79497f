use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(string(Course::CreatedBy))
                    .col(string_null(Course::Image))
                    .col(double(Course::Duration))
                    .col(double(Course::Price))
                    .col(string(Course::Category))
                    .col(json(Course::Syllabus))
                    .col(json(Course::Prerequisites))
                    .col(json(Course::Audience))
                    .col(timestamp_with_time_zone(Course::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Title,
    Description,
    CreatedBy,
    Image,
    Duration,
    Price,
    Category,
    Syllabus,
    Prerequisites,
    Audience,
    CreatedAt,
}
