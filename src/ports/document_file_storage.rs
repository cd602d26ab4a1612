//! Document File Storage Port - Filesystem operations interface.
//!
//! Generated contracts are written under a single output directory, one file
//! per download filename. Adapters (like LocalDocumentFileStorage) provide the
//! implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Port for persisting generated contract files.
///
/// # Contract
///
/// Implementations must:
/// - Support atomic writes (no partial content on failure)
/// - Compute SHA-256 checksums for integrity verification
/// - Reject filenames that would escape the output directory
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn DocumentFileStorage = get_storage();
///
/// let stored = storage.write("contrato_shows_ana_2024-05-01.pdf", &bytes).await?;
/// let again = storage.read("contrato_shows_ana_2024-05-01.pdf").await?;
/// ```
#[async_trait]
pub trait DocumentFileStorage: Send + Sync {
    /// Write document content.
    ///
    /// Creates the output directory if it doesn't exist and replaces any
    /// existing file with the same name.
    ///
    /// # Returns
    ///
    /// Where the file was written, with its size and checksum.
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError>;

    /// Read document content.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError>;

    /// Check if a document file exists.
    async fn exists(&self, filename: &str) -> Result<bool, StorageError>;

    /// Delete a document file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn delete(&self, filename: &str) -> Result<(), StorageError>;

    /// Get file metadata (size, modified time, checksum).
    async fn metadata(&self, filename: &str) -> Result<FileMetadata, StorageError>;

    /// Hex-encoded SHA-256 checksum of the stored content.
    async fn checksum(&self, filename: &str) -> Result<String, StorageError>;

    /// Full path a filename maps to.
    fn file_path(&self, filename: &str) -> Result<FilePath, StorageError>;
}

/// Represents a file path (absolute or relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Creates a new file path from a PathBuf.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    /// Returns a reference to the inner PathBuf.
    pub fn as_path(&self) -> &std::path::Path {
        &self.0
    }

    /// Returns the file name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: FilePath,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the written content.
    pub checksum: String,
}

/// File metadata information.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// File size in bytes.
    pub size_bytes: u64,

    /// Last modification timestamp.
    pub modified_at: DateTime<Utc>,

    /// SHA-256 checksum of the content.
    pub checksum: String,
}

impl FileMetadata {
    /// Creates new file metadata.
    pub fn new(size_bytes: u64, modified_at: DateTime<Utc>, checksum: impl Into<String>) -> Self {
        Self {
            size_bytes,
            modified_at,
            checksum: checksum.into(),
        }
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Filename is empty or contains path components.
    #[error("Invalid filename: {filename}")]
    InvalidFilename { filename: String },

    /// File is too large.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an invalid filename error.
    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }

    /// Creates a file too large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}
