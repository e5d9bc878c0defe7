//! Concert API - concert listings with image uploads
//!
//! Records are kept in PostgreSQL through SeaORM (or in memory), images
//! on the local filesystem.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Concert entity and image naming rules
//! - **services**: Concert and image use cases
//! - **infra**: Database, repositories and image storage
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start without a database
//! cargo run -- serve --in-memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Concert, ConcertChanges, NewConcert};
pub use errors::{AppError, AppResult};
