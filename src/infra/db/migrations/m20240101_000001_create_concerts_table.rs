//! Migration: Create concerts table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Concerts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Concerts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Concerts::Name).string().not_null())
                    .col(ColumnDef::new(Concerts::Organizer).string().not_null())
                    .col(ColumnDef::new(Concerts::Artist).string().not_null())
                    .col(ColumnDef::new(Concerts::Venue).string().not_null())
                    .col(ColumnDef::new(Concerts::Details).text().not_null())
                    .col(ColumnDef::new(Concerts::Price).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Concerts::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Concerts::Image).string().null())
                    .col(
                        ColumnDef::new(Concerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Concerts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_concerts_created_at")
                    .table(Concerts::Table)
                    .col(Concerts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Concerts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Concerts {
    Table,
    Id,
    Name,
    Organizer,
    Artist,
    Venue,
    Details,
    Price,
    Date,
    Image,
    CreatedAt,
    UpdatedAt,
}
