//! Durable file store for uploaded school images.
//!
//! Writes land under one public images directory; the database only ever
//! stores the relative web path returned by [`ImageStore::save`]. Filenames
//! carry a millisecond timestamp prefix (see `schoolhub_core::naming`), the
//! sole safeguard against concurrent-upload collisions.

use std::path::{Path, PathBuf};

use schoolhub_core::naming::stored_filename;

/// Public URL prefix the images directory is served under.
pub const PUBLIC_IMAGE_PREFIX: &str = "/schoolImages";

/// Filesystem store for uploaded images.
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory uploads are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist an upload, returning its relative web path.
    ///
    /// Ensures the target directory exists (idempotent), then writes the
    /// full buffer in one call. The write either fully succeeds or the
    /// caller gets the error before any database row is touched.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;

        let filename = stored_filename(chrono::Utc::now().timestamp_millis(), original_name);
        let path = self.root.join(&filename);
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored uploaded image");
        Ok(format!("{PUBLIC_IMAGE_PREFIX}/{filename}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_bytes_and_returns_web_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().to_path_buf());

        let web_path = store.save("campus photo.jpg", b"jpeg-bytes").await.unwrap();

        assert!(web_path.starts_with("/schoolImages/"));
        assert!(web_path.ends_with("_campus_photo.jpg"));

        let filename = web_path.rsplit('/').next().unwrap();
        let written = std::fs::read(dir.path().join(filename)).unwrap();
        assert_eq!(written, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("nested/schoolImages"));

        let web_path = store.save("a.png", b"png").await.unwrap();
        assert!(web_path.starts_with("/schoolImages/"));
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn save_into_unwritable_root_fails() {
        let store = ImageStore::new(PathBuf::from("/proc/schoolhub-no-such-dir"));
        assert!(store.save("a.png", b"png").await.is_err());
    }
}
