use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request did not come from a logged in user. Results in a 401 Unauthorized
    /// response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Typically happens when an account is removed while a session is still active.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user lacks a permission required by the endpoint.
    ///
    /// Carries the user id and a description of the denied action for logging.
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Please login"
/// - `AccessDenied` → 403 Forbidden with "You are not authorized to access this resource"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Please login to access this resource")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("You are not authorized to access this resource")),
            )
                .into_response(),
        }
    }
}
