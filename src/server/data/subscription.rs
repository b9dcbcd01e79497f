//! User subscription repository.
//!
//! A subscription links one user to one course. Removing a course id from every
//! user's subscription set is a single delete over this table.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the ids of the courses a user is subscribed to, oldest subscription first.
    pub async fn get_course_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserSubscription::find()
            .select_only()
            .column(entity::user_subscription::Column::CourseId)
            .filter(entity::user_subscription::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_subscription::Column::CreatedAt)
            .order_by_asc(entity::user_subscription::Column::CourseId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Removes a course from every user's subscriptions.
    ///
    /// # Arguments
    /// - `course_id` - Id of the course being removed
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of subscriptions removed across all users
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove_course_from_all(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserSubscription::delete_many()
            .filter(entity::user_subscription::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
