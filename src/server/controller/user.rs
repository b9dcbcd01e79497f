use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UpdateRoleDto, UserUpdatedDto, UsersDto},
    },
    server::{
        controller::extract::JsonBody,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{UpdateProfileParam, UpdateRoleParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/admin/users - List every user except the requesting admin
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Users without credentials, ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All other users", body = UsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all_except(admin.id).await?;

    Ok((
        StatusCode::OK,
        Json(UsersDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// PUT /api/admin/role - Change a user's role
///
/// Writes the same value to both the role and main role.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Unknown role
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/admin/role",
    tag = USER_TAG,
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserUpdatedDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateRoleParam::new(payload.id, &payload.role)?;
    let user = UserService::new(&state.db).update_role(param).await?;

    Ok((
        StatusCode::OK,
        Json(UserUpdatedDto {
            message: "User Role Updated".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// PUT /api/admin/profile - Update the requester's own profile
///
/// Absent or blank fields are left unchanged.
///
/// # Access Control
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Email already in use
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserUpdatedDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateProfileParam::from_dto(requester.id, payload);
    let user = UserService::new(&state.db).update_profile(param).await?;

    Ok((
        StatusCode::OK,
        Json(UserUpdatedDto {
            message: "Profile Updated".to_string(),
            user: user.into_dto(),
        }),
    ))
}
