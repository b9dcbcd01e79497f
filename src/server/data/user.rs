//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading users together with their
//! course subscriptions and for the role and profile updates performed by admins and
//! users themselves. Rows are returned as entity models; the password column is
//! dropped when the service converts them to domain models.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::subscription::SubscriptionRepository,
    model::user::{Role, UpdateProfileParam},
};

/// A user row with the ids of its subscribed courses.
pub type UserWithSubscriptions = (entity::user::Model, Vec<i32>);

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by id along with their subscriptions.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    ///
    /// # Returns
    /// - `Ok(Some((user, course_ids)))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<UserWithSubscriptions>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let subscriptions = SubscriptionRepository::new(self.db)
            .get_course_ids_for_user(user_id)
            .await?;

        Ok(Some((user, subscriptions)))
    }

    /// Gets every user except the given one, ordered by name.
    ///
    /// Subscriptions are loaded in the same query through the user relation.
    ///
    /// # Arguments
    /// - `excluded_id` - Id of the user to leave out, usually the requester
    ///
    /// # Returns
    /// - `Ok(Vec<(user, course_ids)>)` - All other users with their subscriptions
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_except(
        &self,
        excluded_id: i32,
    ) -> Result<Vec<UserWithSubscriptions>, DbErr> {
        let rows = entity::prelude::User::find()
            .filter(entity::user::Column::Id.ne(excluded_id))
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .find_with_related(entity::prelude::UserSubscription)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, mut subscriptions)| {
                subscriptions.sort_by_key(|s| (s.created_at, s.course_id));
                let course_ids = subscriptions.into_iter().map(|s| s.course_id).collect();
                (user, course_ids)
            })
            .collect())
    }

    /// Sets a user's role and main role to the same value.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `role` - New role written to both columns
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user row
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(
        &self,
        user_id: i32,
        role: Role,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.role = ActiveValue::Set(role.as_str().to_string());
        active.main_role = ActiveValue::Set(role.as_str().to_string());

        Ok(Some(active.update(self.db).await?))
    }

    /// Applies a partial profile update.
    ///
    /// Only fields present in the parameters are written.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated (or unchanged) user row
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn update_profile(
        &self,
        param: UpdateProfileParam,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(param.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(user));
        }

        let mut active: entity::user::ActiveModel = user.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(avatar) = param.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
