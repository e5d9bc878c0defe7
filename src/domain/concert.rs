//! Concert domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Concert domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concert {
    pub id: Uuid,
    pub name: String,
    pub organizer: String,
    pub artist: String,
    pub venue: String,
    pub details: String,
    pub price: i32,
    pub date: DateTime<Utc>,
    /// Stored image filename, relative to the upload directory
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Concert {
    /// Build a freshly persisted concert from creation data.
    pub fn new(id: Uuid, data: NewConcert, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: data.name,
            organizer: data.organizer,
            artist: data.artist,
            venue: data.venue,
            details: data.details,
            price: data.price,
            date: data.date,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into this concert.
    ///
    /// Fields absent from `changes` are left untouched. `updated_at` is
    /// always refreshed.
    pub fn apply(&mut self, changes: ConcertChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(organizer) = changes.organizer {
            self.organizer = organizer;
        }
        if let Some(artist) = changes.artist {
            self.artist = artist;
        }
        if let Some(venue) = changes.venue {
            self.venue = venue;
        }
        if let Some(details) = changes.details {
            self.details = details;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(image) = changes.image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }
}

/// Concert creation data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewConcert {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Organizer is required"))]
    pub organizer: String,
    pub artist: String,
    pub venue: String,
    #[validate(length(min = 1, message = "Details are required"))]
    pub details: String,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i32,
    pub date: DateTime<Utc>,
}

/// Partial concert update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcertChanges {
    pub name: Option<String>,
    pub organizer: Option<String>,
    pub artist: Option<String>,
    pub venue: Option<String>,
    pub details: Option<String>,
    pub price: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

impl ConcertChanges {
    /// Image filename this update replaces, if any.
    ///
    /// Returns the current image only when the update carries a different one.
    pub fn replaced_image<'a>(&self, current: &'a Concert) -> Option<&'a str> {
        match (&self.image, &current.image) {
            (Some(next), Some(previous)) if next != previous => Some(previous.as_str()),
            _ => None,
        }
    }
}

/// Concert response (shape returned to clients)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcertResponse {
    /// Unique concert identifier
    pub id: Uuid,
    #[schema(example = "Summer Music Festival")]
    pub name: String,
    #[schema(example = "Music Events Inc")]
    pub organizer: String,
    #[schema(example = "John Doe")]
    pub artist: String,
    #[schema(example = "Stadium")]
    pub venue: String,
    #[schema(example = "Annual outdoor music festival")]
    pub details: String,
    #[schema(example = 50)]
    pub price: i32,
    pub date: DateTime<Utc>,
    /// Image filename, served from `/images/{imageName}`
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Concert> for ConcertResponse {
    fn from(concert: Concert) -> Self {
        Self {
            id: concert.id,
            name: concert.name,
            organizer: concert.organizer,
            artist: concert.artist,
            venue: concert.venue,
            details: concert.details,
            price: concert.price,
            date: concert.date,
            image: concert.image,
            created_at: concert.created_at,
            updated_at: concert.updated_at,
        }
    }
}
