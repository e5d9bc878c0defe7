//! Domain layer - Core business entities and logic
//!
//! This module contains the concert model and the naming rules for uploaded
//! images, independent of infrastructure concerns.

pub mod concert;
pub mod image;

pub use concert::{Concert, ConcertChanges, ConcertResponse, NewConcert};
pub use image::{generate_image_name, image_extension, is_plain_file_name};
