//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let course = factory::course::create_course(&db).await?;
//! let lecture = factory::lecture::create_lecture(&db, course.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .name("Admin")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let course = factory::course::CourseFactory::new(&db)
//!     .image(Some(image_path))
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod helpers;
pub mod lecture;
pub mod subscription;
pub mod user;
pub mod workshop;

pub use course::create_course;
pub use lecture::create_lecture;
pub use subscription::create_subscription;
pub use user::{create_admin, create_user};
pub use workshop::create_workshop;
