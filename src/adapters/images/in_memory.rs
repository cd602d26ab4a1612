//! In-memory image loader for tests and embedded assets.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::ports::{ImageLoadError, ImageLoader};

/// Serves images from a fixed reference-to-bytes map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageLoader {
    images: HashMap<String, Vec<u8>>,
}

impl InMemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, reference: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.images.insert(reference.into(), bytes);
        self
    }
}

#[async_trait]
impl ImageLoader for InMemoryImageLoader {
    async fn load(&self, reference: &str) -> Result<Vec<u8>, ImageLoadError> {
        self.images
            .get(reference)
            .cloned()
            .ok_or_else(|| ImageLoadError::not_found(reference))
    }
}
