//! User service for business logic.
//!
//! This module provides the `UserService` for listing users and applying role and
//! profile updates. It works with domain models, so password hashes never reach the
//! controller layer.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::{UserRepository, UserWithSubscriptions},
    error::AppError,
    model::user::{UpdateProfileParam, UpdateRoleParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with subscriptions
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or malformed stored role
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        user.map(into_user).transpose()
    }

    /// Lists every user other than the requester.
    ///
    /// # Arguments
    /// - `requester_id` - Id of the user making the request
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All other users ordered by name
    /// - `Err(AppError)` - Database error or malformed stored role
    pub async fn get_all_except(&self, requester_id: i32) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db)
            .get_all_except(requester_id)
            .await?;

        users.into_iter().map(into_user).collect()
    }

    /// Sets a user's role, keeping the main role identical.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_role(&self, param: UpdateRoleParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.set_role(param.user_id, param.role).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        tracing::info!("Set role of user {} to {}", param.user_id, param.role);

        self.require_user(param.user_id).await
    }

    /// Applies a partial update to the requester's own profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - The requester no longer exists
    /// - `Err(AppError::BadRequest)` - The new email belongs to another user
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<User, AppError> {
        let user_id = param.user_id;

        match UserRepository::new(self.db).update_profile(param).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(AppError::NotFound("User not found".to_string())),
            Err(err) if is_unique_violation(&err) => {
                return Err(AppError::BadRequest(
                    "Email is already in use by another account".to_string(),
                ))
            }
            Err(err) => return Err(err.into()),
        }

        self.require_user(user_id).await
    }

    async fn require_user(&self, user_id: i32) -> Result<User, AppError> {
        self.get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn into_user((user, subscriptions): UserWithSubscriptions) -> Result<User, AppError> {
    Ok(User::from_entity(user, subscriptions)?)
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
