//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - Filesystem storage for uploaded images

pub mod db;
pub mod repositories;
pub mod storage;

pub use db::{Database, Migrator};
pub use repositories::{ConcertRepository, ConcertStore, MemoryConcertStore};
pub use storage::{ByteStream, ImageStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockConcertRepository;
