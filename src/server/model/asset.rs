//! Asset file handles and removal outcomes.

/// A file written to the asset store for the current request.
///
/// Produced by the upload receiver and handed to a service, which either
/// records its path on a new row or discards it when the operation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedAsset {
    /// Path as stored on Course.image or Lecture.video.
    pub path: String,
}

/// Result of a best-effort asset removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRemoval {
    /// No path was recorded so nothing was attempted.
    Skipped,
    /// The file existed and was removed.
    Deleted,
    /// The file was already gone.
    Missing,
    /// The file could not be removed and is left on disk.
    Failed(String),
}

impl AssetRemoval {
    /// Whether the file is known to be gone (or was never there).
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}
