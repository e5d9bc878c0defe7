//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
mod concert_repository;
pub(crate) mod entities;
mod memory;

pub use base::{DeleteRepository, ReadRepository, WriteRepository};
pub use concert_repository::{ConcertRepository, ConcertStore};
pub use memory::MemoryConcertStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use concert_repository::MockConcertRepository;
