//! Filesystem storage for uploaded concert images.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use futures::stream::{BoxStream, StreamExt};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::domain::is_plain_file_name;
use crate::errors::{AppError, AppResult};

/// Byte stream of an upload in progress
pub type ByteStream<'a> = BoxStream<'a, AppResult<Bytes>>;

/// Image directory wrapper
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store for the configured upload directory
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.file_directory.clone())
    }

    /// Directory holding the images
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a stored name to its path; `None` for names that are not a
    /// plain file name.
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        is_plain_file_name(name).then(|| self.root.join(name))
    }

    /// Check whether a regular file with this name exists.
    pub async fn exists(&self, name: &str) -> bool {
        match self.path_of(name) {
            Some(path) => fs::metadata(&path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false),
            None => false,
        }
    }

    /// Stream `data` into a new file called `name`, returning the bytes written.
    ///
    /// A failing stream removes the partially written file.
    pub async fn write(&self, name: &str, mut data: ByteStream<'_>) -> AppResult<u64> {
        let path = self
            .path_of(name)
            .ok_or_else(|| AppError::internal(format!("Invalid image name {}", name)))?;

        fs::create_dir_all(&self.root).await?;
        let mut file = fs::File::create(&path).await?;
        let mut written = 0u64;

        while let Some(chunk) = data.next().await {
            let outcome = match chunk {
                Ok(bytes) => file
                    .write_all(&bytes)
                    .await
                    .map(|()| bytes.len() as u64)
                    .map_err(AppError::from),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(len) => written += len,
                Err(e) => {
                    drop(file);
                    discard_partial(&path).await;
                    return Err(e);
                }
            }
        }

        file.flush().await?;
        tracing::debug!("Stored image {} ({} bytes)", name, written);
        Ok(written)
    }

    /// Remove an image. A file that is already gone is not an error.
    pub async fn remove(&self, name: &str) -> AppResult<()> {
        let Some(path) = self.path_of(name) else {
            return Ok(());
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed image {}", name);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

async fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        tracing::warn!("Failed to remove partial upload {:?}: {}", path, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn chunks(parts: &[&'static str]) -> ByteStream<'static> {
        stream::iter(
            parts
                .iter()
                .map(|p| Ok(Bytes::from_static(p.as_bytes())))
                .collect::<Vec<AppResult<Bytes>>>(),
        )
        .boxed()
    }

    #[tokio::test]
    async fn write_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path().join("nested").join("uploads"));

        let written = store
            .write("a.png", chunks(&["fake-", "image-data"]))
            .await
            .unwrap();

        assert_eq!(written, 15);
        assert!(store.exists("a.png").await);
        let content = std::fs::read(store.root().join("a.png")).unwrap();
        assert_eq!(content, b"fake-image-data");
    }

    #[tokio::test]
    async fn failing_stream_leaves_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());
        let data = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(AppError::bad_request("connection reset")),
        ])
        .boxed();

        let err = store.write("b.gif", data).await.unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
        assert!(!store.exists("b.gif").await);
    }

    #[tokio::test]
    async fn remove_ignores_missing_files_and_odd_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());

        assert!(store.remove("missing.jpg").await.is_ok());
        assert!(store.remove("../escape.jpg").await.is_ok());
        assert!(!store.exists("../escape.jpg").await);
        assert_eq!(store.path_of("../escape.jpg"), None);
    }
}
