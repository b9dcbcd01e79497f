//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert request bodies into parameter
//! types, call a service and convert the resulting domain model into a DTO.

pub mod auth;
pub mod course;
pub mod extract;
pub mod health;
pub mod lecture;
pub mod stats;
pub mod upload;
pub mod user;
