//! Banner image loading configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::images::SourceImageLoaderConfig;

/// Limits for fetching header/footer images.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Remote fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest accepted image in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,

    /// Directory relative image paths are resolved against
    pub base_dir: Option<PathBuf>,
}

impl ImagesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Loader settings for `SourceImageLoader`.
    pub fn loader_config(&self) -> SourceImageLoaderConfig {
        let config = SourceImageLoaderConfig::default()
            .with_timeout(self.timeout())
            .with_max_bytes(self.max_bytes);
        match &self.base_dir {
            Some(dir) => config.with_base_dir(dir.clone()),
            None => config,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidImageTimeout);
        }
        if self.max_bytes == 0 {
            return Err(ValidationError::InvalidImageLimit);
        }
        Ok(())
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_bytes: default_max_bytes(),
            base_dir: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}
