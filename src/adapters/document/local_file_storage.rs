//! Local Filesystem Storage Adapter - Implementation of DocumentFileStorage.
//!
//! Stores generated contracts as files in a single output directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::ports::{DocumentFileStorage, FileMetadata, FilePath, StorageError, StoredFile};

/// Maximum file size allowed (50 MB).
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Local filesystem storage for generated contracts.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// A crash mid-write never leaves a truncated contract behind.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalDocumentFileStorage::new("./contratos");
/// let stored = storage.write("contrato_shows_ana_2024-05-01.pdf", &bytes).await?;
/// println!("{} ({} bytes, sha256 {})", stored.path, stored.size_bytes, stored.checksum);
/// ```
#[derive(Debug, Clone)]
pub struct LocalDocumentFileStorage {
    /// Directory all files are written to.
    base_path: PathBuf,
}

impl LocalDocumentFileStorage {
    /// Creates a new local file storage rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolves a bare filename inside the base directory.
    fn document_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_path.join(filename)),
            _ => Err(StorageError::invalid_filename(filename)),
        }
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        self.document_path(&format!("{}.tmp", filename))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    /// Computes SHA-256 checksum of the given content.
    fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }

    async fn write_and_rename(
        temp_path: &Path,
        final_path: &Path,
        content: &[u8],
    ) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| Self::map_io(temp_path, "create", e))?;
        file.write_all(content)
            .await
            .map_err(|e| Self::map_io(temp_path, "write", e))?;
        file.sync_all()
            .await
            .map_err(|e| Self::map_io(temp_path, "sync", e))?;
        drop(file);

        fs::rename(temp_path, final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }

    fn map_io(path: &Path, action: &str, e: std::io::Error) -> StorageError {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            _ => StorageError::io(format!("Failed to {} {}: {}", action, path.display(), e)),
        }
    }
}

#[async_trait]
impl DocumentFileStorage for LocalDocumentFileStorage {
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError> {
        let size = content.len() as u64;
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::file_too_large(size, MAX_FILE_SIZE_BYTES));
        }

        let final_path = self.document_path(filename)?;
        let temp_path = self.temp_path(filename)?;
        self.ensure_base_dir().await?;

        if let Err(e) = Self::write_and_rename(&temp_path, &final_path, content).await {
            // The temp file may not exist if creation itself failed.
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        let checksum = Self::compute_checksum(content);
        debug!(path = %final_path.display(), size, checksum = %checksum, "contract file written");

        Ok(StoredFile {
            path: FilePath::new(final_path),
            size_bytes: size,
            checksum,
        })
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.document_path(filename)?;
        fs::read(&path).await.map_err(|e| Self::map_io(&path, "read", e))
    }

    async fn exists(&self, filename: &str) -> Result<bool, StorageError> {
        let path = self.document_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn delete(&self, filename: &str) -> Result<(), StorageError> {
        let path = self.document_path(filename)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| Self::map_io(&path, "delete", e))
    }

    async fn metadata(&self, filename: &str) -> Result<FileMetadata, StorageError> {
        let path = self.document_path(filename)?;

        let file_meta = fs::metadata(&path)
            .await
            .map_err(|e| Self::map_io(&path, "get metadata for", e))?;
        let modified = file_meta
            .modified()
            .map_err(|e| Self::map_io(&path, "get modification time for", e))?;

        let checksum = self.checksum(filename).await?;
        let modified_at: DateTime<Utc> = modified.into();

        Ok(FileMetadata::new(file_meta.len(), modified_at, checksum))
    }

    async fn checksum(&self, filename: &str) -> Result<String, StorageError> {
        let content = self.read(filename).await?;
        Ok(Self::compute_checksum(&content))
    }

    fn file_path(&self, filename: &str) -> Result<FilePath, StorageError> {
        self.document_path(filename).map(FilePath::new)
    }
}
