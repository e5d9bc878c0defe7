//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod concert_service;
pub mod container;
mod image_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use concert_service::{ConcertManager, ConcertService, ImageUpload};
pub use image_service::{ImageManager, ImageService};
