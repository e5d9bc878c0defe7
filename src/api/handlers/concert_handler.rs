//! Concert handlers.
//!
//! Every failure on these routes is reported as `400 Bad Request`.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    handler::Handler,
    routing::get,
    Router,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use futures::{StreamExt, TryStreamExt};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{MultipartForm, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    MSG_CONCERTS_RETRIEVED, MSG_CONCERT_CREATED, MSG_CONCERT_DELETED, MSG_CONCERT_RETRIEVED,
    MSG_CONCERT_UPDATED,
};
use crate::domain::{ConcertChanges, ConcertResponse, NewConcert};
use crate::errors::{AppError, AppResult, AsBadRequest};
use crate::services::{ConcertService, ImageUpload};
use crate::types::ApiResponse;

type ConcertResult<T> = Result<ApiResponse<T>, AsBadRequest>;

/// Multipart body of `POST /concert` (documentation only)
#[derive(ToSchema)]
pub struct CreateConcertForm {
    #[schema(example = "Summer Music Festival")]
    pub name: String,
    #[schema(example = "Music Events Inc")]
    pub organizer: String,
    #[schema(example = "John Doe")]
    pub artist: Option<String>,
    #[schema(example = "Stadium")]
    pub venue: Option<String>,
    #[schema(example = "Annual outdoor music festival")]
    pub details: String,
    #[schema(example = 50, minimum = 0)]
    pub price: Option<i32>,
    /// `YYYY-MM-DD` or RFC 3339; defaults to now
    #[schema(example = "2023-07-15")]
    pub date: Option<String>,
    /// Concert image (jpg, jpeg, png, gif)
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Partial concert update request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConcertRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Winter Jazz Night")]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Organizer is required"))]
    pub organizer: Option<String>,
    pub artist: Option<String>,
    pub venue: Option<String>,
    pub details: Option<String>,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    #[schema(example = 75)]
    pub price: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    /// Filename of an already stored image
    pub image: Option<String>,
}

impl From<UpdateConcertRequest> for ConcertChanges {
    fn from(req: UpdateConcertRequest) -> Self {
        Self {
            name: req.name,
            organizer: req.organizer,
            artist: req.artist,
            venue: req.venue,
            details: req.details,
            price: req.price,
            date: req.date,
            image: req.image,
        }
    }
}

/// Create concert routes
pub fn concert_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/concert",
            get(find_all).post(create.layer(DefaultBodyLimit::max(max_upload_bytes))),
        )
        .route("/concert/:id", get(find_one).put(update).delete(remove))
}

/// List all concerts
#[utoipa::path(
    get,
    path = "/concert",
    tag = "Concerts",
    responses(
        (status = 200, description = "Concerts retrieved successfully", body = [ConcertResponse]),
        (status = 400, description = "Request failed")
    )
)]
pub async fn find_all(State(state): State<AppState>) -> ConcertResult<Vec<ConcertResponse>> {
    let concerts = state.concert_service.find().await?;
    let data = concerts.into_iter().map(ConcertResponse::from).collect();

    Ok(ApiResponse::ok(data, MSG_CONCERTS_RETRIEVED))
}

/// Get concert by ID
#[utoipa::path(
    get,
    path = "/concert/{id}",
    tag = "Concerts",
    params(("id" = String, Path, description = "Concert ID")),
    responses(
        (status = 200, description = "Concert retrieved successfully", body = ConcertResponse),
        (status = 400, description = "Concert not found")
    )
)]
pub async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ConcertResult<ConcertResponse> {
    let concert = state.concert_service.find_one(parse_id(&id)?).await?;

    Ok(ApiResponse::ok(concert.into(), MSG_CONCERT_RETRIEVED))
}

/// Create a concert, optionally uploading its image
#[utoipa::path(
    post,
    path = "/concert",
    tag = "Concerts",
    request_body(content = CreateConcertForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Concert created successfully", body = ConcertResponse),
        (status = 400, description = "Bad request - Invalid input or file type")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    MultipartForm(multipart): MultipartForm,
) -> ConcertResult<ConcertResponse> {
    let service = state.concert_service.as_ref();
    let mut form = ConcertForm::default();
    let mut image = None;

    if let Err(e) = read_form(service, multipart, &mut form, &mut image).await {
        if let Some(filename) = image {
            if let Err(cleanup) = service.discard_image(&filename).await {
                tracing::warn!("Failed to remove image {}: {:?}", filename, cleanup);
            }
        }
        return Err(e.into());
    }

    let concert = service.create(form.into_new_concert(), image).await?;

    Ok(ApiResponse::created(concert.into(), MSG_CONCERT_CREATED))
}

/// Update a concert
#[utoipa::path(
    put,
    path = "/concert/{id}",
    tag = "Concerts",
    params(("id" = String, Path, description = "Concert ID")),
    request_body = UpdateConcertRequest,
    responses(
        (status = 200, description = "Concert updated successfully", body = ConcertResponse),
        (status = 400, description = "Validation error or concert not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateConcertRequest>,
) -> ConcertResult<ConcertResponse> {
    let concert = state
        .concert_service
        .update(parse_id(&id)?, payload.into())
        .await?;

    Ok(ApiResponse::ok(concert.into(), MSG_CONCERT_UPDATED))
}

/// Delete a concert and its image
#[utoipa::path(
    delete,
    path = "/concert/{id}",
    tag = "Concerts",
    params(("id" = String, Path, description = "Concert ID")),
    responses(
        (status = 200, description = "Concert deleted successfully"),
        (status = 400, description = "Concert not found")
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ConcertResult<()> {
    state.concert_service.delete(parse_id(&id)?).await?;

    Ok(ApiResponse::no_content(MSG_CONCERT_DELETED))
}

/// A malformed ID can never match a record.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::concert_not_found(raw))
}

/// Text fields collected from the multipart body
#[derive(Debug, Default)]
struct ConcertForm {
    name: String,
    organizer: String,
    artist: String,
    venue: String,
    details: String,
    price: i32,
    date: Option<DateTime<Utc>>,
}

impl ConcertForm {
    fn set(&mut self, field: &str, value: String) -> AppResult<()> {
        match field {
            "name" => self.name = value,
            "organizer" => self.organizer = value,
            "artist" => self.artist = value,
            "venue" => self.venue = value,
            "details" => self.details = value,
            "price" => self.price = parse_price(&value)?,
            "date" => self.date = Some(parse_date(&value)?),
            other => tracing::debug!("Ignoring form field {}", other),
        }
        Ok(())
    }

    fn into_new_concert(self) -> NewConcert {
        NewConcert {
            name: self.name,
            organizer: self.organizer,
            artist: self.artist,
            venue: self.venue,
            details: self.details,
            price: self.price,
            date: self.date.unwrap_or_else(Utc::now),
        }
    }
}

/// Walk the multipart body, saving the image part as it streams in.
///
/// `image` is set as soon as an image is stored so the caller can discard it
/// when a later part fails.
async fn read_form(
    service: &dyn ConcertService,
    mut multipart: Multipart,
    form: &mut ConcertForm,
    image: &mut Option<String>,
) -> AppResult<()> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        let Some(filename) = field.file_name().map(str::to_owned) else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            form.set(&name, value)?;
            continue;
        };

        // Browsers send an empty file part when no file was chosen
        if filename.is_empty() {
            continue;
        }
        if image.is_some() {
            return Err(AppError::bad_request("Only one image can be uploaded"));
        }

        let mimetype = field.content_type().unwrap_or_default().to_string();
        let file = field
            .map_err(|e| AppError::bad_request(e.body_text()))
            .boxed();

        let stored = service
            .save_image(ImageUpload {
                filename,
                mimetype,
                file,
            })
            .await?;
        *image = Some(stored);
    }

    Ok(())
}

fn parse_price(value: &str) -> AppResult<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation("Price must be an integer"))
}

/// Accepts `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .ok_or_else(|| AppError::validation("Date must be a valid date"))
}
