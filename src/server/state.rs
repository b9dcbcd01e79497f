//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Both fields are cheap to clone: the
//! database connection is a pool handle and the asset store only holds its root path.

use sea_orm::DatabaseConnection;

use crate::server::data::asset::AssetStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Store for uploaded course images and lecture videos.
    pub assets: AssetStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `assets` - Asset store rooted at the uploads directory
    pub fn new(db: DatabaseConnection, assets: AssetStore) -> Self {
        Self { db, assets }
    }
}
