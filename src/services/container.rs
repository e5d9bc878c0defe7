//! Service Container - Centralized service access.
//!
//! Wires repositories and the image store into the service implementations.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{ConcertManager, ConcertService, ImageManager, ImageService};
use crate::config::Config;
use crate::infra::{ConcertRepository, ConcertStore, ImageStore, MemoryConcertStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get concert service
    fn concerts(&self) -> Arc<dyn ConcertService>;

    /// Get image service
    fn images(&self) -> Arc<dyn ImageService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    concert_service: Arc<dyn ConcertService>,
    image_service: Arc<dyn ImageService>,
}

impl Services {
    /// Create service container backed by the database
    pub fn from_connection(db: Arc<DatabaseConnection>, config: &Config) -> Self {
        Self::with_repository(Arc::new(ConcertStore::new(db)), config)
    }

    /// Create service container backed by an in-process store
    pub fn in_memory(config: &Config) -> Self {
        Self::with_repository(Arc::new(MemoryConcertStore::new()), config)
    }

    /// Create service container over any concert repository
    pub fn with_repository(repo: Arc<dyn ConcertRepository>, config: &Config) -> Self {
        let images = Arc::new(ImageStore::from_config(config));

        Self {
            concert_service: Arc::new(ConcertManager::new(repo, images.clone())),
            image_service: Arc::new(ImageManager::new(images)),
        }
    }
}

impl ServiceContainer for Services {
    fn concerts(&self) -> Arc<dyn ConcertService> {
        self.concert_service.clone()
    }

    fn images(&self) -> Arc<dyn ImageService> {
        self.image_service.clone()
    }
}
