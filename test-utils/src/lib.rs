//! Coursedesk Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the course
//! administration backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, sessions, and temporary asset directories.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection, session and asset directory
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn deletes_course() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_course_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
