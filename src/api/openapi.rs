//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{concert_handler, image_handler};
use crate::domain::ConcertResponse;

/// OpenAPI documentation for the Concert API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Concert API",
        version = "0.1.0",
        description = "Concert listings with image uploads, built on Axum and SeaORM"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Concert endpoints
        concert_handler::find_all,
        concert_handler::find_one,
        concert_handler::create,
        concert_handler::update,
        concert_handler::remove,
        // Image endpoints
        image_handler::get_image,
    ),
    components(
        schemas(
            ConcertResponse,
            concert_handler::CreateConcertForm,
            concert_handler::UpdateConcertRequest,
        )
    ),
    tags(
        (name = "Concerts", description = "Concert management operations"),
        (name = "Images", description = "Concert image downloads")
    )
)]
pub struct ApiDoc;
