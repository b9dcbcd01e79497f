//! Lecture factory for creating test lecture entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lectures under an existing course.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lecture::LectureFactory;
///
/// let lecture = LectureFactory::new(&db, course.id)
///     .video(Some(video_path))
///     .build()
///     .await?;
/// ```
pub struct LectureFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    title: String,
    description: String,
    video: Option<String>,
}

impl<'a> LectureFactory<'a> {
    /// Creates a new LectureFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Lecture {id}"` where id is auto-incremented
    /// - video: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_id` - ID of the course owning the lecture
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            course_id,
            title: format!("Lecture {}", id),
            description: "Test lecture description".to_string(),
            video: None,
        }
    }

    /// Sets the lecture title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the lecture video asset path.
    pub fn video(mut self, video: Option<String>) -> Self {
        self.video = video;
        self
    }

    /// Builds and inserts the lecture entity into the database.
    pub async fn build(self) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            course_id: ActiveValue::Set(self.course_id),
            video: ActiveValue::Set(self.video),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lecture without a video under the given course.
pub async fn create_lecture(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::lecture::Model, DbErr> {
    LectureFactory::new(db, course_id).build().await
}
