//! JSON data transfer objects exchanged with API consumers.

pub mod api;
pub mod course;
pub mod lecture;
pub mod stats;
pub mod user;
