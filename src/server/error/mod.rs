//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use std::any::Any;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` and `ValidationError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request input failed validation.
    ///
    /// Results in 400 Bad Request listing every offending field.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected state inside the application, such as malformed stored data.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    ///
    /// Raised while migrating the session store. Results in 500 Internal Server Error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Filesystem error while staging an upload or binding the listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart request body.
    ///
    /// Uses the status suggested by axum, which is a 4xx for client mistakes
    /// such as exceeding the body limit.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Request body is not a multipart form.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// JSON body missing, malformed or of the wrong shape.
    ///
    /// Uses the status suggested by axum (400, 415 or 422).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path segment that does not parse into the expected type.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication and validation errors delegate to their own response handling, while
/// other errors use standard mappings. Internal errors are logged with full details but
/// return generic messages to avoid information leakage.
///
/// # Returns
/// - 4xx - For `BadRequest`, `ValidationErr` and rejected path, JSON or multipart input
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::MultipartErr(err) => rejection_response(err.status(), err.body_text(), err),
            Self::MultipartRejection(err) => {
                rejection_response(err.status(), err.body_text(), err)
            }
            Self::JsonRejection(err) => rejection_response(err.status(), err.body_text(), err),
            Self::PathRejection(err) => rejection_response(err.status(), err.body_text(), err),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps an axum extractor failure in an `ErrorDto`, keeping axum's status.
fn rejection_response<E: std::fmt::Display>(status: StatusCode, message: String, err: E) -> Response {
    if status.is_server_error() {
        return InternalServerError(err).into_response();
    }
    (status, Json(ErrorDto::new(message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

/// Builds the response for a panic caught in a request handler.
///
/// The panic payload is always logged. It is only echoed to the client as
/// `detail` when `include_detail` is set, which is the case outside production.
///
/// # Arguments
/// - `include_detail` - Whether the panic message is exposed in the body
/// - `payload` - Panic payload captured by `CatchPanicLayer`
///
/// # Returns
/// A 500 Internal Server Error response with an `ErrorDto` body
pub fn panic_response(include_detail: bool, payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("Request handler panicked: {}", message);

    let mut body = ErrorDto::new("Internal server error");
    if include_detail {
        body.detail = Some(message);
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
