//! Concert repository backed by PostgreSQL through SeaORM.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::concert::{self, ActiveModel, Entity as ConcertEntity, Model};
use crate::domain::{Concert, ConcertChanges, NewConcert};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Concert repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConcertRepository: Send + Sync {
    /// Find concert by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Concert>>;

    /// List all concerts, oldest first
    async fn list(&self) -> AppResult<Vec<Concert>>;

    /// Persist a new concert; ID and timestamps are assigned here
    async fn create(&self, data: NewConcert, image: Option<String>) -> AppResult<Concert>;

    /// Merge partial changes into an existing concert
    async fn update(&self, id: Uuid, changes: ConcertChanges) -> AppResult<Concert>;

    /// Delete concert by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ConcertRepository
pub struct ConcertStore {
    db: Arc<DatabaseConnection>,
}

impl ConcertStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl ReadRepository<ConcertEntity, Model> for ConcertStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

impl WriteRepository<ConcertEntity, Model, ActiveModel> for ConcertStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

impl DeleteRepository<ConcertEntity> for ConcertStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

#[async_trait]
impl ConcertRepository for ConcertStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Concert>> {
        let model = ReadRepository::<ConcertEntity, Model>::find_by_id(self, id).await?;
        Ok(model.map(Concert::from))
    }

    async fn list(&self) -> AppResult<Vec<Concert>> {
        let models = ConcertEntity::find()
            .order_by_asc(concert::Column::CreatedAt)
            .order_by_asc(concert::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Concert::from).collect())
    }

    async fn create(&self, data: NewConcert, image: Option<String>) -> AppResult<Concert> {
        let concert = Concert::new(Uuid::new_v4(), data, image);
        let active_model = ActiveModel {
            id: Set(concert.id),
            name: Set(concert.name),
            organizer: Set(concert.organizer),
            artist: Set(concert.artist),
            venue: Set(concert.venue),
            details: Set(concert.details),
            price: Set(concert.price),
            date: Set(concert.date),
            image: Set(concert.image),
            created_at: Set(concert.created_at),
            updated_at: Set(concert.updated_at),
        };

        let model = WriteRepository::<ConcertEntity, Model, ActiveModel>::insert(self, active_model)
            .await?;
        Ok(Concert::from(model))
    }

    async fn update(&self, id: Uuid, changes: ConcertChanges) -> AppResult<Concert> {
        let model = ReadRepository::<ConcertEntity, Model>::find_by_id(self, id)
            .await?
            .ok_or_else(|| AppError::concert_not_found(id))?;

        let mut active = model.into_active_model();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(organizer) = changes.organizer {
            active.organizer = Set(organizer);
        }
        if let Some(artist) = changes.artist {
            active.artist = Set(artist);
        }
        if let Some(venue) = changes.venue {
            active.venue = Set(venue);
        }
        if let Some(details) = changes.details {
            active.details = Set(details);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(image) = changes.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = WriteRepository::<ConcertEntity, Model, ActiveModel>::update(self, active).await?;
        Ok(Concert::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let affected = DeleteRepository::<ConcertEntity>::delete_by_id(self, id).await?;

        if affected == 0 {
            return Err(AppError::concert_not_found(id));
        }

        Ok(())
    }
}
