//! User domain models and parameters.
//!
//! Users carry a role and a duplicated main role that are always written together,
//! plus the ids of the courses they are subscribed to. The stored password hash
//! never leaves the repository boundary.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UpdateProfileDto, UserDto},
    server::error::{
        internal::InternalError,
        validation::{FieldIssue, ValidationError},
    },
};

/// Role assigned to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(format!("unknown role '{}', expected 'admin' or 'user'", other)),
        }
    }
}

/// Application user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: Role,
    /// Mirrors `role`; kept for API consumers that read it.
    pub main_role: Role,
    /// Ids of subscribed courses.
    pub subscriptions: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model and its subscription ids to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row; its password column is dropped here
    /// - `subscriptions` - Ids of the courses the user subscribes to
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(InternalError::UnknownStoredRole)` - Role or main role column holds
    ///   an unknown value
    pub fn from_entity(
        entity: entity::user::Model,
        subscriptions: Vec<i32>,
    ) -> Result<Self, InternalError> {
        let parse = |value: String| {
            value
                .parse::<Role>()
                .map_err(|_| InternalError::UnknownStoredRole {
                    user_id: entity.id,
                    value,
                })
        };

        Ok(Self {
            id: entity.id,
            role: parse(entity.role)?,
            main_role: parse(entity.main_role)?,
            name: entity.name,
            email: entity.email,
            avatar: entity.avatar,
            subscriptions,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            role: self.role.to_string(),
            main_role: self.main_role.to_string(),
            subscription: self.subscriptions,
        }
    }
}

/// Parameters for changing another user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateRoleParam {
    pub user_id: i32,
    pub role: Role,
}

impl UpdateRoleParam {
    /// # Returns
    /// - `Err(ValidationError::InvalidFields)` - The requested role is not known
    pub fn new(user_id: i32, role: &str) -> Result<Self, ValidationError> {
        let role = role
            .trim()
            .parse::<Role>()
            .map_err(|message| ValidationError::InvalidFields(vec![FieldIssue::new("role", message)]))?;

        Ok(Self { user_id, role })
    }
}

/// Partial update of the requester's own profile.
///
/// `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateProfileParam {
    /// Builds the update from a DTO, treating blank strings as not provided.
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        let provided = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            user_id,
            name: provided(dto.name),
            email: provided(dto.email),
            avatar: provided(dto.avatar),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar.is_none()
    }
}
