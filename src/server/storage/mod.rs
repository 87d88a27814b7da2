//! Pluggable file storage for uploaded class images and profile photos.
//!
//! A backend turns uploaded bytes into a location string that is stored in the
//! database as-is. The local backend returns root-relative URL paths served by the
//! router (`/uploads/...`, `/profileimg/...`); the object backend returns absolute
//! URLs under its public base.

pub mod local;
pub mod object;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::server::error::storage::StorageError;

/// Folder an upload is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    /// Class images.
    Uploads,
    /// Profile photos.
    ProfileImg,
}

impl UploadFolder {
    pub const ALL: [UploadFolder; 2] = [UploadFolder::Uploads, UploadFolder::ProfileImg];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uploads => "uploads",
            Self::ProfileImg => "profileimg",
        }
    }
}

/// File storage used by the upload binder.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Stores `bytes` under `folder` with a freshly generated file name.
    ///
    /// # Arguments
    /// - `folder` - Target folder
    /// - `original_name` - Client file name, only its extension is kept
    /// - `bytes` - File content
    ///
    /// # Returns
    /// - `Ok(String)` - Location to persist and hand back to clients
    /// - `Err(StorageError)` - Write or upload failed
    async fn store(
        &self,
        folder: UploadFolder,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;

    /// Whether `location` was produced by this backend.
    fn owns(&self, location: &str) -> bool;

    /// Reads the file at a location previously returned by `store`.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - File content
    /// - `Ok(None)` - Nothing stored there
    /// - `Err(StorageError::InvalidLocation)` - Location is not owned by this backend
    /// - `Err(StorageError)` - Read failed
    async fn fetch(&self, location: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Directory to serve statically, for backends writing to local disk.
    fn local_root(&self) -> Option<&Path> {
        None
    }
}

/// Generates a unique file name `{unix millis}-{random hex}{.ext}`.
///
/// The extension of `original_name` is kept only when it is short and alphanumeric,
/// lower-cased.
pub fn generate_file_name(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::random();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10)
        .filter(|ext| ext.bytes().all(|b| b.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!("{millis}-{suffix:08x}{extension}")
}

/// Splits `folder/name` into a folder and a single safe path segment.
pub(crate) fn split_relative(relative: &str) -> Option<(UploadFolder, &str)> {
    let (folder, name) = relative.split_once('/')?;
    let folder = UploadFolder::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == folder)?;

    let safe = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.starts_with('.');

    safe.then_some((folder, name))
}

pub(crate) fn relative_path(folder: UploadFolder, name: &str) -> PathBuf {
    Path::new(folder.as_str()).join(name)
}
