//! Multipart extractor with the application's rejection format.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::errors::{AppError, AsBadRequest};

/// `multipart/form-data` body; any other request is rejected as a bad request.
pub struct MultipartForm(pub Multipart);

#[async_trait]
impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = AsBadRequest;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Multipart rejection: {}", e);
            AppError::bad_request("Request must be multipart/form-data")
        })?;

        Ok(MultipartForm(multipart))
    }
}
