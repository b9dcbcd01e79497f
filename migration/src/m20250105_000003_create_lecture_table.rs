use sea_orm_migration::{prelude::*, schema::*};

use super::m20250105_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(pk_auto(Lecture::Id))
                    .col(string(Lecture::Title))
                    .col(text(Lecture::Description))
                    .col(integer(Lecture::CourseId))
                    .col(string_null(Lecture::Video))
                    .col(timestamp_with_time_zone(Lecture::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_course_id")
                            .from(Lecture::Table, Lecture::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lecture_course_id")
                    .table(Lecture::Table)
                    .col(Lecture::CourseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecture {
    Table,
    Id,
    Title,
    Description,
    CourseId,
    Video,
    CreatedAt,
}
