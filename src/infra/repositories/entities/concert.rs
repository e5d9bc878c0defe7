//! Concert database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Concert;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "concerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub organizer: String,
    pub artist: String,
    pub venue: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub price: i32,
    pub date: DateTimeUtc,
    /// Stored image filename (NULL = no image)
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Concert {
    fn from(model: Model) -> Self {
        Concert {
            id: model.id,
            name: model.name,
            organizer: model.organizer,
            artist: model.artist,
            venue: model.venue,
            details: model.details,
            price: model.price,
            date: model.date,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
