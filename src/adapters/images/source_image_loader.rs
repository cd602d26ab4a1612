//! SourceImageLoader - Resolves banner references from data URIs, HTTP or disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use tokio::fs;
use tracing::debug;

use crate::ports::{ImageLoadError, ImageLoader};

/// Settings for [`SourceImageLoader`].
#[derive(Debug, Clone)]
pub struct SourceImageLoaderConfig {
    /// Upper bound on a remote fetch.
    pub timeout: Duration,

    /// Largest accepted image, in bytes.
    pub max_bytes: u64,

    /// Directory relative paths are resolved against.
    pub base_dir: Option<PathBuf>,
}

impl Default for SourceImageLoaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_bytes: 5 * 1024 * 1024,
            base_dir: None,
        }
    }
}

impl SourceImageLoaderConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

/// Loads image bytes from whatever an `<img src>` points at.
///
/// Supported references:
/// - `data:<mime>;base64,<payload>` (and the rare non-base64 form)
/// - `http://` and `https://` URLs
/// - `file://` URLs and plain filesystem paths
pub struct SourceImageLoader {
    config: SourceImageLoaderConfig,
    client: Client,
}

impl SourceImageLoader {
    pub fn new(config: SourceImageLoaderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    fn check_size(&self, size: u64) -> Result<(), ImageLoadError> {
        if size > self.config.max_bytes {
            return Err(ImageLoadError::too_large(size, self.config.max_bytes));
        }
        Ok(())
    }

    fn load_data_uri(&self, reference: &str) -> Result<Vec<u8>, ImageLoadError> {
        let rest = &reference["data:".len()..];
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| ImageLoadError::InvalidDataUri("missing ',' separator".into()))?;

        let bytes = if meta.to_ascii_lowercase().ends_with(";base64") {
            let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD
                .decode(cleaned)
                .map_err(|e| ImageLoadError::InvalidDataUri(e.to_string()))?
        } else {
            payload.as_bytes().to_vec()
        };

        self.check_size(bytes.len() as u64)?;
        Ok(bytes)
    }

    async fn load_remote(&self, reference: &str) -> Result<Vec<u8>, ImageLoadError> {
        let timeout_error = |e: reqwest::Error| {
            if e.is_timeout() {
                ImageLoadError::Timeout {
                    reference: reference.to_string(),
                    seconds: self.config.timeout.as_secs(),
                }
            } else {
                ImageLoadError::fetch(reference, e.to_string())
            }
        };

        let response = self.client.get(reference).send().await.map_err(timeout_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ImageLoadError::not_found(reference));
        }
        if !status.is_success() {
            return Err(ImageLoadError::fetch(reference, format!("status {}", status)));
        }
        if let Some(length) = response.content_length() {
            self.check_size(length)?;
        }

        let bytes = response.bytes().await.map_err(timeout_error)?;
        self.check_size(bytes.len() as u64)?;
        Ok(bytes.to_vec())
    }

    fn resolve_path(&self, reference: &str) -> PathBuf {
        let raw = reference.strip_prefix("file://").unwrap_or(reference);
        let path = Path::new(raw);
        match &self.config.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    async fn load_file(&self, reference: &str) -> Result<Vec<u8>, ImageLoadError> {
        let path = self.resolve_path(reference);

        let metadata = fs::metadata(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImageLoadError::not_found(reference),
            _ => ImageLoadError::fetch(reference, e.to_string()),
        })?;
        if !metadata.is_file() {
            return Err(ImageLoadError::not_found(reference));
        }
        self.check_size(metadata.len())?;

        fs::read(&path)
            .await
            .map_err(|e| ImageLoadError::fetch(reference, e.to_string()))
    }
}

#[async_trait]
impl ImageLoader for SourceImageLoader {
    async fn load(&self, reference: &str) -> Result<Vec<u8>, ImageLoadError> {
        let reference = reference.trim();
        let lower = reference.to_ascii_lowercase();

        let bytes = if lower.starts_with("data:") {
            self.load_data_uri(reference)?
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            self.load_remote(reference).await?
        } else if lower.contains("://") && !lower.starts_with("file://") {
            return Err(ImageLoadError::unsupported(reference));
        } else if reference.is_empty() {
            return Err(ImageLoadError::not_found(reference));
        } else {
            self.load_file(reference).await?
        };

        debug!(bytes = bytes.len(), "banner image loaded");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader() -> SourceImageLoader {
        SourceImageLoader::new(SourceImageLoaderConfig::default())
    }

    // ───────────────────────────────────────────────────────────────
    // Data URIs
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn decodes_base64_data_uri() {
        let encoded = STANDARD.encode(b"\x89PNG fake");
        let reference = format!("data:image/png;base64,{}", encoded);
        assert_eq!(loader().load(&reference).await.unwrap(), b"\x89PNG fake");
    }

    #[tokio::test]
    async fn rejects_malformed_data_uri() {
        let result = loader().load("data:image/png;base64").await;
        assert!(matches!(result, Err(ImageLoadError::InvalidDataUri(_))));

        let result = loader().load("data:image/png;base64,@@@").await;
        assert!(matches!(result, Err(ImageLoadError::InvalidDataUri(_))));
    }

    #[tokio::test]
    async fn enforces_size_limit_on_data_uri() {
        let loader = SourceImageLoader::new(SourceImageLoaderConfig::default().with_max_bytes(4));
        let reference = format!("data:image/png;base64,{}", STANDARD.encode(b"12345"));
        assert!(matches!(
            loader.load(&reference).await,
            Err(ImageLoadError::TooLarge { size_bytes: 5, max_bytes: 4 })
        ));
    }

    // ───────────────────────────────────────────────────────────────
    // Filesystem
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn reads_relative_paths_from_base_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"bytes").unwrap();

        let loader =
            SourceImageLoader::new(SourceImageLoaderConfig::default().with_base_dir(dir.path()));
        assert_eq!(loader.load("logo.png").await.unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn reads_file_urls() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("footer.png");
        std::fs::write(&path, b"rodape").unwrap();

        let reference = format!("file://{}", path.display());
        assert_eq!(loader().load(&reference).await.unwrap(), b"rodape");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let result = loader().load("/nonexistent/banner.png").await;
        assert!(matches!(result, Err(ImageLoadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn unknown_scheme_is_unsupported() {
        let result = loader().load("ftp://example.com/logo.png").await;
        assert!(matches!(result, Err(ImageLoadError::UnsupportedReference { .. })));
    }
}
