//! HTTP request handlers.

pub mod concert_handler;
pub mod image_handler;

pub use concert_handler::concert_routes;
pub use image_handler::image_routes;
