//! Create `room_gallery` table with FK to `rooms`.
//!
//! Gallery rows are ordered per room by `order_number` (1-based) and die
//! with their room.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomGallery::Table)
                    .if_not_exists()
                    .col(uuid(RoomGallery::Id).primary_key())
                    .col(uuid(RoomGallery::RoomId).not_null())
                    .col(text(RoomGallery::ImageUrl).not_null())
                    .col(integer(RoomGallery::OrderNumber).not_null())
                    .col(timestamp_with_time_zone(RoomGallery::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_gallery_room")
                            .from(RoomGallery::Table, RoomGallery::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RoomGallery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum RoomGallery {
    #[sea_orm(iden = "room_gallery")]
    Table,
    Id,
    RoomId,
    ImageUrl,
    OrderNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
}
