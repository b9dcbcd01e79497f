//! Server-side API backend and business logic.
//!
//! This module contains the backend for the course administration API: endpoints,
//! business logic, data access and the local asset store for uploaded media. The
//! backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, uploads and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, transactions and asset cleanup
//! - **Data Layer** (`data/`) - Database repositories and the asset file store
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, asset store)
//! - **Startup** (`startup`) - Tracing, database, session and CORS setup
//! - **Router** (`router`) - Axum route configuration
//! - **Documentation** (`doc`) - OpenAPI description served by Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks access, reads the body into parameters, calls service
//! 3. **Service** executes business logic, orchestrates data and asset operations
//! 4. **Data** queries database, returns entity models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
