//! Application configuration module
//!
//! Environment-driven settings (database, upload directory, server address)
//! and the constants shared by the rest of the crate.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
