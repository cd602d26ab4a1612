//! Image Loader Port - Fetches banner images referenced by templates.
//!
//! References are whatever a template's `<img src>` carries: a `data:` URI,
//! an `http(s)` URL or a filesystem path.

use async_trait::async_trait;
use thiserror::Error;

/// Port for loading raw image bytes.
///
/// # Contract
///
/// Implementations must:
/// - Return the undecoded image bytes for a reference
/// - Fail with `ImageLoadError` instead of panicking on any bad input
/// - Bound the time spent on remote fetches
///
/// Callers treat every failure as soft and fall back to a text banner.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, reference: &str) -> Result<Vec<u8>, ImageLoadError>;
}

/// Errors that can occur while loading or decoding an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    #[error("Image not found: {reference}")]
    NotFound { reference: String },

    #[error("Unsupported image reference: {reference}")]
    UnsupportedReference { reference: String },

    #[error("Failed to fetch {reference}: {reason}")]
    Fetch { reference: String, reason: String },

    #[error("Fetching {reference} timed out after {seconds} seconds")]
    Timeout { reference: String, seconds: u64 },

    #[error("Image too large: {size_bytes} bytes (max: {max_bytes})")]
    TooLarge { size_bytes: u64, max_bytes: u64 },

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

impl ImageLoadError {
    pub fn not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            reference: reference.into(),
        }
    }

    pub fn unsupported(reference: impl Into<String>) -> Self {
        Self::UnsupportedReference {
            reference: reference.into(),
        }
    }

    pub fn fetch(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    pub fn too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::TooLarge {
            size_bytes,
            max_bytes,
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_reference() {
        let err = ImageLoadError::fetch("https://cdn.example.com/h.png", "status 404");
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://cdn.example.com/h.png: status 404"
        );
    }

    #[test]
    fn too_large_reports_limit() {
        let err = ImageLoadError::too_large(10, 5);
        assert!(err.to_string().contains("max: 5"));
    }
}
