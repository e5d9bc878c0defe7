//! Concert service tests against the in-memory store and a temporary
//! image directory.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use chrono::{TimeZone, Utc};
use futures::stream::{self, StreamExt};
use tempfile::TempDir;
use uuid::Uuid;

use concert_api::domain::{Concert, ConcertChanges, NewConcert};
use concert_api::errors::{AppError, AppResult};
use concert_api::infra::{ConcertRepository, ImageStore, MemoryConcertStore};
use concert_api::services::{ConcertManager, ConcertService, ImageUpload};

fn new_concert() -> NewConcert {
    NewConcert {
        name: "Summer Music Festival".to_string(),
        organizer: "Music Events Inc".to_string(),
        artist: "John Doe".to_string(),
        venue: "Stadium".to_string(),
        details: "Annual outdoor music festival".to_string(),
        price: 50,
        date: Utc.with_ymd_and_hms(2023, 7, 15, 0, 0, 0).unwrap(),
    }
}

fn setup() -> (TempDir, ConcertManager) {
    let tmp = tempfile::tempdir().unwrap();
    let service = ConcertManager::new(
        Arc::new(MemoryConcertStore::new()),
        Arc::new(ImageStore::new(tmp.path())),
    );
    (tmp, service)
}

fn upload(filename: &str, mimetype: &str, content: &'static str) -> ImageUpload<'static> {
    ImageUpload {
        filename: filename.to_string(),
        mimetype: mimetype.to_string(),
        file: stream::iter(vec![Ok(Bytes::from_static(content.as_bytes()))]).boxed(),
    }
}

fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

// =============================================================================
// Records
// =============================================================================

#[tokio::test]
async fn test_create_then_find_one_returns_same_fields() {
    let (_tmp, service) = setup();

    let created = service.create(new_concert(), None).await.unwrap();
    let found = service.find_one(created.id).await.unwrap();

    assert_eq!(found, created);
    assert_eq!(found.name, "Summer Music Festival");
    assert_eq!(found.price, 50);
    assert_eq!(found.image, None);
    assert_eq!(found.created_at, found.updated_at);
}

#[tokio::test]
async fn test_find_lists_oldest_first() {
    let (_tmp, service) = setup();

    let first = service.create(new_concert(), None).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = service
        .create(
            NewConcert {
                name: "Winter Jazz Night".to_string(),
                ..new_concert()
            },
            None,
        )
        .await
        .unwrap();

    let ids: Vec<Uuid> = service.find().await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_update_subset_leaves_other_fields_unchanged() {
    let (_tmp, service) = setup();
    let created = service.create(new_concert(), None).await.unwrap();

    let updated = service
        .update(
            created.id,
            ConcertChanges {
                venue: Some("Jazz Club".to_string()),
                price: Some(75),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.venue, "Jazz Club");
    assert_eq!(updated.price, 75);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.organizer, created.organizer);
    assert_eq!(updated.details, created.details);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_nonexistent_fails_with_not_found() {
    let (_tmp, service) = setup();

    let err = service
        .update(Uuid::new_v4(), ConcertChanges::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_nonexistent_fails_with_not_found() {
    let (_tmp, service) = setup();
    let id = Uuid::new_v4();

    let err = service.delete(id).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), format!("Concert with ID {} not found", id));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (_tmp, service) = setup();
    let created = service.create(new_concert(), None).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert!(service.find_one(created.id).await.unwrap_err().is_not_found());
    assert!(service.find().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let (_tmp, service) = setup();

    let err = service
        .create(
            NewConcert {
                price: -10,
                ..new_concert()
            },
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(service.find().await.unwrap().is_empty());
}

// =============================================================================
// Images
// =============================================================================

#[tokio::test]
async fn test_save_image_keeps_extension_and_writes_content() {
    let (tmp, service) = setup();

    let filename = service
        .save_image(upload("photo.jpg", "image/jpeg", "fake-image-data"))
        .await
        .unwrap();

    let (stem, extension) = filename.split_once('.').unwrap();
    assert_eq!(extension, "jpg");
    assert_eq!(stem.len(), 32);
    assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        std::fs::read(tmp.path().join(&filename)).unwrap(),
        b"fake-image-data"
    );
}

#[tokio::test]
async fn test_save_image_rejects_non_image_and_writes_nothing() {
    let (tmp, service) = setup();

    let err = service
        .save_image(upload("notes.pdf", "application/pdf", "%PDF"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "File is not an image");
    assert_eq!(file_count(tmp.path()), 0);
}

#[tokio::test]
async fn test_update_with_new_image_deletes_previous_file() {
    let (tmp, service) = setup();
    let first = service
        .save_image(upload("first.png", "image/png", "first"))
        .await
        .unwrap();
    let created = service
        .create(new_concert(), Some(first.clone()))
        .await
        .unwrap();

    let second = service
        .save_image(upload("second.png", "image/png", "second"))
        .await
        .unwrap();
    let updated = service
        .update(
            created.id,
            ConcertChanges {
                image: Some(second.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.image.as_deref(), Some(second.as_str()));
    assert!(!tmp.path().join(&first).exists());
    assert!(tmp.path().join(&second).exists());
}

#[tokio::test]
async fn test_update_with_same_image_keeps_file() {
    let (tmp, service) = setup();
    let image = service
        .save_image(upload("cover.gif", "image/gif", "gif"))
        .await
        .unwrap();
    let created = service
        .create(new_concert(), Some(image.clone()))
        .await
        .unwrap();

    service
        .update(
            created.id,
            ConcertChanges {
                image: Some(image.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(tmp.path().join(&image).exists());
}

#[tokio::test]
async fn test_delete_removes_image_file() {
    let (tmp, service) = setup();
    let image = service
        .save_image(upload("cover.jpg", "image/jpeg", "jpg"))
        .await
        .unwrap();
    let created = service.create(new_concert(), Some(image.clone())).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert!(!tmp.path().join(&image).exists());
}

#[tokio::test]
async fn test_delete_tolerates_missing_image_file() {
    let (_tmp, service) = setup();
    let created = service
        .create(new_concert(), Some("already-gone.jpg".to_string()))
        .await
        .unwrap();

    assert!(service.delete(created.id).await.is_ok());
}

// =============================================================================
// Failure propagation
// =============================================================================

/// Repository whose writes always fail
struct FailingRepository;

#[async_trait]
impl ConcertRepository for FailingRepository {
    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Concert>> {
        Ok(None)
    }

    async fn list(&self) -> AppResult<Vec<Concert>> {
        Err(AppError::internal("connection lost"))
    }

    async fn create(&self, _data: NewConcert, _image: Option<String>) -> AppResult<Concert> {
        Err(AppError::internal("connection lost"))
    }

    async fn update(&self, id: Uuid, _changes: ConcertChanges) -> AppResult<Concert> {
        Err(AppError::concert_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        Err(AppError::concert_not_found(id))
    }
}

#[tokio::test]
async fn test_failed_create_leaves_no_orphan_image() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ConcertManager::new(
        Arc::new(FailingRepository),
        Arc::new(ImageStore::new(tmp.path())),
    );

    let image = service
        .save_image(upload("cover.png", "image/png", "png"))
        .await
        .unwrap();
    assert_eq!(file_count(tmp.path()), 1);

    let err = service.create(new_concert(), Some(image)).await.unwrap_err();

    assert!(matches!(err, AppError::Internal(_)));
    assert_eq!(file_count(tmp.path()), 0);
}

#[tokio::test]
async fn test_list_errors_propagate() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ConcertManager::new(
        Arc::new(FailingRepository),
        Arc::new(ImageStore::new(tmp.path())),
    );

    assert!(service.find().await.is_err());
}
