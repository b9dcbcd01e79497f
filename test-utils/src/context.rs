use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context containing database connection, session, and asset directory.
///
/// Provides an in-memory SQLite database connection, a session and a temporary
/// directory standing in for the uploads folder. Each is created lazily on first
/// access and persists for the lifetime of the test context; the asset directory
/// is removed from disk when the context is dropped.
#[derive(Default)]
pub struct TestContext {
    /// Database connection to the in-memory SQLite instance.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same in-memory SQLite database as `db`.
    pub session: Option<Session>,

    /// Temporary directory used as the asset store root.
    pub assets: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            assets: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call the session store table is migrated into the in-memory database
    /// and a fresh session is created. Subsequent calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize database connection or session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(1))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker issues when calling `database()` and `session()` separately.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }

    /// Gets or creates the temporary asset directory.
    ///
    /// # Returns
    /// - `Ok(&Path)` - Path of the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory
    pub fn asset_dir(&mut self) -> Result<&Path, TestError> {
        match self.assets {
            Some(ref dir) => Ok(dir.path()),
            None => {
                let dir = tempfile::tempdir()?;

                let dir_ref = self.assets.insert(dir);

                Ok(dir_ref.path())
            }
        }
    }

    /// Writes a file into the asset directory and returns its path as stored on records.
    ///
    /// # Arguments
    /// - `name` - File name relative to the asset directory
    /// - `contents` - Bytes to write
    ///
    /// # Returns
    /// - `Ok(String)` - Full path of the written file
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub fn write_asset(&mut self, name: &str, contents: &[u8]) -> Result<String, TestError> {
        let path: PathBuf = self.asset_dir()?.join(name);
        std::fs::write(&path, contents)?;

        Ok(path.to_string_lossy().into_owned())
    }

    /// Gets or creates database connection and asset directory together.
    pub async fn db_and_assets(&mut self) -> Result<(&DatabaseConnection, PathBuf), TestError> {
        let dir = self.asset_dir()?.to_path_buf();
        let db = self.database().await?;

        Ok((db, dir))
    }
}
