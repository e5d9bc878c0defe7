//! Image download handler.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    response::Response,
    routing::get,
    Router,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::api::AppState;
use crate::errors::AppResult;

/// Create image routes
pub fn image_routes() -> Router<AppState> {
    Router::new().route("/images/:imageName", get(get_image))
}

/// Download a stored concert image
#[utoipa::path(
    get,
    path = "/images/{imageName}",
    tag = "Images",
    params(("imageName" = String, Path, description = "Stored image filename")),
    responses(
        (status = 200, description = "Image bytes; Content-Type follows the file extension"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(image_name): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = state.image_service.get(&image_name).await?;

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.map(Body::new)),
        Err(never) => match never {},
    }
}
