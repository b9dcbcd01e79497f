//! `SeaORM` entities for the course administration database.

pub mod prelude;

pub mod course;
pub mod lecture;
pub mod user;
pub mod user_subscription;
pub mod workshop;
