//! Indexes for the hot lookup paths: room ordering/visibility and
//! per-parent gallery fetches.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rooms_order_number")
                    .table(Room::Table)
                    .col(Room::OrderNumber)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rooms_active")
                    .table(Room::Table)
                    .col(Room::Active)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_room_gallery_room_id")
                    .table(RoomGallery::Table)
                    .col(RoomGallery::RoomId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_slider_items_order_number")
                    .table(SliderItem::Table)
                    .col(SliderItem::OrderNumber)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_gallery_service_id")
                    .table(ServiceGallery::Table)
                    .col(ServiceGallery::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_rooms_order_number").table(Room::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_rooms_active").table(Room::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_room_gallery_room_id").table(RoomGallery::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_slider_items_order_number").table(SliderItem::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_service_gallery_service_id").table(ServiceGallery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    OrderNumber,
    Active,
}

#[derive(DeriveIden)]
enum RoomGallery {
    #[sea_orm(iden = "room_gallery")]
    Table,
    RoomId,
}

#[derive(DeriveIden)]
enum SliderItem {
    #[sea_orm(iden = "slider_items")]
    Table,
    OrderNumber,
}

#[derive(DeriveIden)]
enum ServiceGallery {
    #[sea_orm(iden = "service_gallery")]
    Table,
    ServiceId,
}
