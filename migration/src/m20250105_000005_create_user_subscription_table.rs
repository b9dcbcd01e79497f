use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250105_000001_create_user_table::User, m20250105_000002_create_course_table::Course};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSubscription::Table)
                    .if_not_exists()
                    .col(integer(UserSubscription::UserId))
                    .col(integer(UserSubscription::CourseId))
                    .col(timestamp_with_time_zone(UserSubscription::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserSubscription::UserId)
                            .col(UserSubscription::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_subscription_user_id")
                            .from(UserSubscription::Table, UserSubscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_subscription_course_id")
                            .from(UserSubscription::Table, UserSubscription::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSubscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserSubscription {
    Table,
    UserId,
    CourseId,
    CreatedAt,
}
