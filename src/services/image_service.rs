//! Image service - Resolves stored images for download.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::{AppResult, OptionExt};
use crate::infra::ImageStore;

/// Image service trait for dependency injection.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Resolve an image name to an existing file on disk
    async fn get(&self, name: &str) -> AppResult<PathBuf>;
}

/// Concrete implementation of ImageService
pub struct ImageManager {
    store: Arc<ImageStore>,
}

impl ImageManager {
    /// Create new image service instance
    pub fn new(store: Arc<ImageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ImageService for ImageManager {
    async fn get(&self, name: &str) -> AppResult<PathBuf> {
        let path = match self.store.exists(name).await {
            true => self.store.path_of(name),
            false => None,
        };

        path.ok_or_not_found("Image not found")
    }
}
