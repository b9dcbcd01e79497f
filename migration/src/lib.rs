pub use sea_orm_migration::prelude::*;

mod m20250105_000001_create_user_table;
mod m20250105_000002_create_course_table;
mod m20250105_000003_create_lecture_table;
mod m20250105_000004_create_workshop_table;
mod m20250105_000005_create_user_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_user_table::Migration),
            Box::new(m20250105_000002_create_course_table::Migration),
            Box::new(m20250105_000003_create_lecture_table::Migration),
            Box::new(m20250105_000004_create_workshop_table::Migration),
            Box::new(m20250105_000005_create_user_subscription_table::Migration),
        ]
    }
}
