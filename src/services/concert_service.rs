//! Concert service - Handles concert-related business logic.
//!
//! Owns the link between records and their image files: uploads are written
//! through the image store, and replaced or orphaned images are removed.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::config::is_allowed_image_type;
use crate::domain::{generate_image_name, Concert, ConcertChanges, NewConcert};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ByteStream, ConcertRepository, ImageStore};

/// An image upload as received from the client
pub struct ImageUpload<'a> {
    /// Original filename, used only for its extension
    pub filename: String,
    /// Declared MIME type
    pub mimetype: String,
    /// File content
    pub file: ByteStream<'a>,
}

/// Concert service trait for dependency injection.
#[async_trait]
pub trait ConcertService: Send + Sync {
    /// Validate and persist a new concert, optionally linked to a stored image
    async fn create(&self, data: NewConcert, image: Option<String>) -> AppResult<Concert>;

    /// List all concerts
    async fn find(&self) -> AppResult<Vec<Concert>>;

    /// Get concert by ID
    async fn find_one(&self, id: Uuid) -> AppResult<Concert>;

    /// Merge partial changes; a replaced image file is deleted
    async fn update(&self, id: Uuid, changes: ConcertChanges) -> AppResult<Concert>;

    /// Delete concert and its image file
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Store an uploaded image and return its generated filename
    async fn save_image(&self, upload: ImageUpload<'_>) -> AppResult<String>;

    /// Remove a stored image that ended up unused
    async fn discard_image(&self, filename: &str) -> AppResult<()>;
}

/// Concrete implementation of ConcertService
pub struct ConcertManager {
    repo: Arc<dyn ConcertRepository>,
    images: Arc<ImageStore>,
}

impl ConcertManager {
    /// Create new concert service instance
    pub fn new(repo: Arc<dyn ConcertRepository>, images: Arc<ImageStore>) -> Self {
        Self { repo, images }
    }

    /// Best-effort removal; the record operation has already succeeded
    async fn remove_image_quietly(&self, filename: &str) {
        if let Err(e) = self.images.remove(filename).await {
            tracing::warn!("Failed to remove image {}: {:?}", filename, e);
        }
    }
}

#[async_trait]
impl ConcertService for ConcertManager {
    async fn create(&self, data: NewConcert, image: Option<String>) -> AppResult<Concert> {
        let result = match data.validate() {
            Ok(()) => self.repo.create(data, image.clone()).await,
            Err(e) => Err(AppError::from(e)),
        };

        match result {
            Ok(concert) => {
                tracing::info!(id = %concert.id, "Concert created");
                Ok(concert)
            }
            Err(e) => {
                if let Some(filename) = image {
                    self.remove_image_quietly(&filename).await;
                }
                Err(e)
            }
        }
    }

    async fn find(&self) -> AppResult<Vec<Concert>> {
        self.repo.list().await
    }

    async fn find_one(&self, id: Uuid) -> AppResult<Concert> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("Concert with ID {} not found", id))
    }

    async fn update(&self, id: Uuid, changes: ConcertChanges) -> AppResult<Concert> {
        let current = self.find_one(id).await?;
        let replaced = changes.replaced_image(&current).map(str::to_owned);

        let updated = self.repo.update(id, changes).await?;

        if let Some(previous) = replaced {
            self.remove_image_quietly(&previous).await;
        }

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let current = self.find_one(id).await?;
        self.repo.delete(id).await?;

        if let Some(image) = current.image {
            self.remove_image_quietly(&image).await;
        }

        tracing::info!(id = %id, "Concert deleted");
        Ok(())
    }

    async fn save_image(&self, upload: ImageUpload<'_>) -> AppResult<String> {
        if !is_allowed_image_type(&upload.mimetype) {
            return Err(AppError::validation("File is not an image"));
        }

        let filename = generate_image_name(&upload.filename);
        self.images.write(&filename, upload.file).await?;

        tracing::info!("Saved image {} (uploaded as {})", filename, upload.filename);
        Ok(filename)
    }

    async fn discard_image(&self, filename: &str) -> AppResult<()> {
        self.images.remove(filename).await
    }
}
