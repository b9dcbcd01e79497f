use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto};

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Request input rejected before anything is persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields are absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Fields are present but malformed.
    #[error("Invalid fields: {}", join_issues(.0))]
    InvalidFields(Vec<FieldIssue>),
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
impl ValidationError {
    /// Names of the rejected fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::MissingFields(fields) => fields.clone(),
            Self::InvalidFields(issues) => issues.iter().map(|i| i.field).collect(),
        }
    }
}

/// Converts validation errors into a 400 Bad Request with one entry per field.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let (error, fields) = match self {
            Self::MissingFields(fields) => (
                "Missing required fields",
                fields
                    .into_iter()
                    .map(|field| FieldErrorDto {
                        field: field.to_string(),
                        message: "is required".to_string(),
                    })
                    .collect(),
            ),
            Self::InvalidFields(issues) => (
                "Invalid request fields",
                issues
                    .into_iter()
                    .map(|issue| FieldErrorDto {
                        field: issue.field.to_string(),
                        message: issue.message,
                    })
                    .collect(),
            ),
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: error.to_string(),
                fields,
                detail: None,
            }),
        )
            .into_response()
    }
}
