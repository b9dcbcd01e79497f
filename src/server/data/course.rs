//! Course data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::model::course::CreateCourseParams;

/// Repository providing database operations for courses.
///
/// Generic over the connection so it can run on the pool or inside a transaction.
pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new CourseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new course from validated parameters.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted course row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCourseParams) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            created_by: ActiveValue::Set(params.created_by),
            image: ActiveValue::Set(params.image),
            duration: ActiveValue::Set(params.duration),
            price: ActiveValue::Set(params.price),
            category: ActiveValue::Set(params.category),
            syllabus: ActiveValue::Set(serde_json::Value::from(params.syllabus)),
            prerequisites: ActiveValue::Set(serde_json::Value::from(params.prerequisites)),
            audience: ActiveValue::Set(serde_json::Value::from(params.audience)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a course by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Course found
    /// - `Ok(None)` - No course with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Gets all courses, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_desc(entity::course::Column::CreatedAt)
            .order_by_desc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a course row.
    ///
    /// Lectures and subscriptions are removed by the caller beforehand; the foreign key
    /// cascade only catches rows that slipped in concurrently.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }
}
