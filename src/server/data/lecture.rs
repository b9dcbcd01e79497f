//! Lecture data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::lecture::CreateLectureParams;

/// Repository providing database operations for lectures.
pub struct LectureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LectureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a lecture under the course named in the parameters.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted lecture row
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   course does not exist
    pub async fn create(
        &self,
        params: CreateLectureParams,
    ) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            course_id: ActiveValue::Set(params.course_id),
            video: ActiveValue::Set(params.video),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::lecture::Model>, DbErr> {
        entity::prelude::Lecture::find_by_id(id).one(self.db).await
    }

    /// Gets every lecture of a course in creation order.
    ///
    /// # Arguments
    /// - `course_id` - Id of the owning course
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Lectures of the course, empty if it has none or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<entity::lecture::Model>, DbErr> {
        entity::prelude::Lecture::find()
            .filter(entity::lecture::Column::CourseId.eq(course_id))
            .order_by_asc(entity::lecture::Column::CreatedAt)
            .order_by_asc(entity::lecture::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a lecture row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Lecture::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes every lecture of a course.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of lectures deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Lecture::delete_many()
            .filter(entity::lecture::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Lecture::find().count(self.db).await
    }
}
