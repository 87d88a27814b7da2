//! Storage backend writing uploads below a local directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::server::{
    error::storage::StorageError,
    storage::{generate_file_name, relative_path, split_relative, StorageBackend, UploadFolder},
};

/// Stores files as `{root}/{folder}/{name}` and hands out `/{folder}/{name}`.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolves a location to a path, refusing anything outside the root.
    fn resolve(&self, location: &str) -> Result<PathBuf, StorageError> {
        let relative = location
            .strip_prefix('/')
            .and_then(split_relative)
            .ok_or_else(|| StorageError::InvalidLocation(location.to_string()))?;

        Ok(self.root.join(relative_path(relative.0, relative.1)))
    }

    async fn read_safe(&self, path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
        let root = tokio::fs::canonicalize(&self.root)
            .await
            .unwrap_or_else(|_| self.root.clone());
        let canonical = match tokio::fs::canonicalize(path).await {
            Ok(canonical) => canonical,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if !canonical.starts_with(&root) {
            return Err(StorageError::InvalidLocation(path.display().to_string()));
        }

        Ok(Some(tokio::fs::read(canonical).await?))
    }
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn store(
        &self,
        folder: UploadFolder,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let name = generate_file_name(original_name);
        let dir = self.root.join(folder.as_str());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&name), bytes).await?;

        tracing::debug!("Stored {} bytes under {}", dir.display(), name);

        Ok(format!("/{}/{}", folder.as_str(), name))
    }

    fn owns(&self, location: &str) -> bool {
        location
            .strip_prefix('/')
            .and_then(split_relative)
            .is_some()
    }

    async fn fetch(&self, location: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.resolve(location)?;
        self.read_safe(&path).await
    }

    fn local_root(&self) -> Option<&Path> {
        Some(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_fetches_file() -> Result<(), StorageError> {
        let dir = tempfile::tempdir()?;
        let storage = LocalStorage::new(dir.path().to_path_buf());

        let location = storage
            .store(UploadFolder::ProfileImg, "me.png", b"png-bytes".to_vec())
            .await?;

        assert!(location.starts_with("/profileimg/"));
        assert!(location.ends_with(".png"));
        assert!(storage.owns(&location));
        assert_eq!(storage.fetch(&location).await?, Some(b"png-bytes".to_vec()));

        let on_disk = dir.path().join(location.trim_start_matches('/'));
        assert!(on_disk.exists());

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_none() -> Result<(), StorageError> {
        let dir = tempfile::tempdir()?;
        let storage = LocalStorage::new(dir.path().to_path_buf());

        assert_eq!(storage.fetch("/uploads/1-deadbeef.png").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_traversal_and_foreign_locations() -> Result<(), StorageError> {
        let dir = tempfile::tempdir()?;
        let storage = LocalStorage::new(dir.path().to_path_buf());

        for location in [
            "/uploads/../../etc/passwd",
            "/secrets/key.pem",
            "https://example.com/a.png",
            "uploads/a.png",
        ] {
            assert!(!storage.owns(location));
            assert!(matches!(
                storage.fetch(location).await,
                Err(StorageError::InvalidLocation(_))
            ));
        }

        Ok(())
    }

    #[tokio::test]
    async fn exposes_root_for_static_serving() {
        let storage = LocalStorage::new(PathBuf::from("/srv/schoolmate"));

        assert_eq!(storage.local_root(), Some(Path::new("/srv/schoolmate")));
    }
}
