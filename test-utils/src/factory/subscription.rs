//! Subscription factory linking users to courses.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Subscribes a user to a course.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the subscribing user
/// - `course_id` - ID of the course subscribed to
///
/// # Returns
/// - `Ok(entity::user_subscription::Model)` - Created subscription row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate subscription)
pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: i32,
    course_id: i32,
) -> Result<entity::user_subscription::Model, DbErr> {
    entity::user_subscription::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        course_id: ActiveValue::Set(course_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
