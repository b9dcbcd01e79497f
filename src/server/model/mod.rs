//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request input is validated while building parameter types, so services only ever
//! see well-formed values.

pub mod asset;
pub mod course;
pub mod lecture;
pub mod stats;
pub mod user;
