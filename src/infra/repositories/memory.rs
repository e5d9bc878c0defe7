//! In-memory concert repository.
//!
//! Backs `serve --in-memory` and the service/API tests. Nothing is persisted.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ConcertRepository;
use crate::domain::{Concert, ConcertChanges, NewConcert};
use crate::errors::{AppError, AppResult};

/// Concert repository holding records in a lock-guarded map
#[derive(Default)]
pub struct MemoryConcertStore {
    concerts: RwLock<HashMap<Uuid, Concert>>,
}

impl MemoryConcertStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConcertRepository for MemoryConcertStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Concert>> {
        Ok(self.concerts.read().await.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Concert>> {
        let mut concerts: Vec<Concert> = self.concerts.read().await.values().cloned().collect();
        concerts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(concerts)
    }

    async fn create(&self, data: NewConcert, image: Option<String>) -> AppResult<Concert> {
        let concert = Concert::new(Uuid::new_v4(), data, image);
        self.concerts
            .write()
            .await
            .insert(concert.id, concert.clone());
        Ok(concert)
    }

    async fn update(&self, id: Uuid, changes: ConcertChanges) -> AppResult<Concert> {
        let mut concerts = self.concerts.write().await;
        let concert = concerts
            .get_mut(&id)
            .ok_or_else(|| AppError::concert_not_found(id))?;

        concert.apply(changes);
        Ok(concert.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.concerts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::concert_not_found(id))
    }
}
