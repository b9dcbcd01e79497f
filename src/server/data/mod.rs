//! Database repository layer and asset file store.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They are generic over `ConnectionTrait`, so the same queries run on the connection
//! pool or inside a `DatabaseTransaction` when a service needs several steps to
//! commit together. Repositories return entity models; services convert them to
//! domain models. The `asset` module owns files on disk referenced by course and
//! lecture rows.

pub mod asset;
pub mod course;
pub mod lecture;
pub mod subscription;
pub mod user;
pub mod workshop;
