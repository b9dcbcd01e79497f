//! Request extractors that report failures as `ErrorDto` bodies.
//!
//! Wrap axum's `Path`, `Json` and `Multipart` so a bad id, malformed JSON or a
//! non-multipart body is rejected through `AppError` instead of axum's plain text.

use axum::{
    extract::{FromRequest, FromRequestParts, Multipart},
    Json,
};

use crate::server::error::AppError;

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Deserialized JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Multipart request body, read with `UploadForm::read`.
#[derive(FromRequest)]
#[from_request(rejection(AppError))]
pub struct MultipartBody(pub Multipart);
