//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{ConcertService, ImageService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Concert service
    pub concert_service: Arc<dyn ConcertService>,
    /// Image service
    pub image_service: Arc<dyn ImageService>,
    /// Database connection; `None` when running on the in-memory store
    pub database: Option<Arc<Database>>,
    /// Body limit for concert uploads
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.shared_connection(), config);
        Self::from_container(&container, Some(database), config)
    }

    /// Create application state backed by the in-memory store.
    pub fn in_memory(config: &Config) -> Self {
        Self::from_container(&Services::in_memory(config), None, config)
    }

    /// Create application state from any service container.
    pub fn from_container(
        container: &dyn ServiceContainer,
        database: Option<Arc<Database>>,
        config: &Config,
    ) -> Self {
        Self {
            concert_service: container.concerts(),
            image_service: container.images(),
            database,
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
