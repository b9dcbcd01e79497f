//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .title("Rust for Admins")
///     .image(Some("/tmp/uploads/cover.png".to_string()))
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    created_by: String,
    image: Option<String>,
    duration: f64,
    price: f64,
    category: String,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"` where id is auto-incremented
    /// - duration: `6.0`, price: `199.0`
    /// - image: `None`
    /// - empty syllabus, prerequisites and audience lists
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Course {}", id),
            description: "Test course description".to_string(),
            created_by: "Instructor".to_string(),
            image: None,
            duration: 6.0,
            price: 199.0,
            category: "security".to_string(),
        }
    }

    /// Sets the course title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the course image asset path.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Sets the course category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_by: ActiveValue::Set(self.created_by),
            image: ActiveValue::Set(self.image),
            duration: ActiveValue::Set(self.duration),
            price: ActiveValue::Set(self.price),
            category: ActiveValue::Set(self.category),
            syllabus: ActiveValue::Set(json!([])),
            prerequisites: ActiveValue::Set(json!([])),
            audience: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
