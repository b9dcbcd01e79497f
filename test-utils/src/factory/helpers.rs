//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course with the given number of lectures.
///
/// All entities use default values. Use the individual factories when a test
/// needs assets or custom fields.
///
/// # Arguments
/// - `db` - Database connection
/// - `lectures` - Number of lectures to create under the course
///
/// # Returns
/// - `Ok((course, lectures))` - The course and its lectures in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_lectures(
    db: &DatabaseConnection,
    lectures: usize,
) -> Result<(entity::course::Model, Vec<entity::lecture::Model>), DbErr> {
    let course = crate::factory::course::create_course(db).await?;

    let mut created = Vec::with_capacity(lectures);
    for _ in 0..lectures {
        created.push(crate::factory::lecture::create_lecture(db, course.id).await?);
    }

    Ok((course, created))
}
