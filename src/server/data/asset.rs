//! Local filesystem store for uploaded images and videos.
//!
//! Files live directly under a single root directory and are referenced from
//! database rows by their root-joined path. Removal is best-effort: it reports
//! what happened as an `AssetRemoval` and never returns an error, so a stale or
//! locked file cannot block a database delete.

use std::path::{Component, Path, PathBuf};

use futures::future::join_all;
use tokio::fs::{File, OpenOptions};

use crate::server::model::asset::AssetRemoval;

/// Longest file extension kept from an uploaded file name.
const MAX_EXTENSION_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Opens the store, creating the root directory if needed.
    ///
    /// # Arguments
    /// - `root` - Directory holding every asset file
    ///
    /// # Returns
    /// - `Ok(AssetStore)` - Store rooted at the directory
    /// - `Err(io::Error)` - Directory could not be created
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        Ok(Self { root })
    }

    #[cfg(test)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates a new, uniquely named file for an upload to be written into.
    ///
    /// The name is a random UUID; the extension of the client's file name is kept
    /// when it is short and alphanumeric so static serving picks a sensible type.
    ///
    /// # Arguments
    /// - `extension` - Extension of the uploaded file name, without the dot
    ///
    /// # Returns
    /// - `Ok((path, file))` - Stored path of the asset and its open file handle
    /// - `Err(io::Error)` - File could not be created
    pub async fn stage(&self, extension: Option<&str>) -> Result<(String, File), std::io::Error> {
        let mut name = uuid::Uuid::new_v4().to_string();
        if let Some(ext) = extension.filter(|ext| is_safe_extension(ext)) {
            name.push('.');
            name.push_str(&ext.to_ascii_lowercase());
        }

        let path = self.root.join(name);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        Ok((path.to_string_lossy().into_owned(), file))
    }

    /// Removes an asset file if it exists.
    ///
    /// Refuses paths outside the store root or containing `..` components.
    ///
    /// # Arguments
    /// - `path` - Stored asset path, `None` or empty when the row has no asset
    ///
    /// # Returns
    /// - `AssetRemoval` describing the outcome, which has already been logged
    pub async fn delete(&self, path: Option<&str>) -> AssetRemoval {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return AssetRemoval::Skipped;
        };

        let file = Path::new(path);
        if !self.contains(file) {
            tracing::warn!("Refusing to delete asset outside of {}: {}", self.root.display(), path);
            return AssetRemoval::Failed("path is outside the asset store".to_string());
        }

        match tokio::fs::try_exists(file).await {
            Ok(false) => {
                tracing::info!("Asset already absent: {}", path);
                AssetRemoval::Missing
            }
            Ok(true) => match tokio::fs::remove_file(file).await {
                Ok(()) => {
                    tracing::info!("Deleted asset: {}", path);
                    AssetRemoval::Deleted
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    tracing::info!("Asset already absent: {}", path);
                    AssetRemoval::Missing
                }
                Err(err) => {
                    tracing::warn!("Failed to delete asset {}: {}", path, err);
                    AssetRemoval::Failed(err.to_string())
                }
            },
            Err(err) => {
                tracing::warn!("Failed to check asset {}: {}", path, err);
                AssetRemoval::Failed(err.to_string())
            }
        }
    }

    /// Removes several assets concurrently.
    ///
    /// Every removal runs to completion; a failure does not cancel the others.
    ///
    /// # Returns
    /// - `Vec<(path, AssetRemoval)>` - One entry per input path, in input order
    pub async fn delete_all(&self, paths: Vec<String>) -> Vec<(String, AssetRemoval)> {
        let removals = join_all(paths.iter().map(|path| self.delete(Some(path)))).await;

        paths.into_iter().zip(removals).collect()
    }

    fn contains(&self, path: &Path) -> bool {
        path != self.root
            && path.starts_with(&self.root)
            && !path.components().any(|c| matches!(c, Component::ParentDir))
    }
}

fn is_safe_extension(ext: &str) -> bool {
    !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
}
