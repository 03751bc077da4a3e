//! Create `rooms` table with optional FK to `room_types`.
//!
//! Bilingual text columns carry both languages on the same row; feature
//! lists are JSON arrays of strings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(uuid(Room::Id).primary_key())
                    .col(string_len(Room::NameTr, 255).not_null())
                    .col(string_len(Room::NameEn, 255).not_null())
                    .col(text(Room::DescriptionTr).not_null())
                    .col(text(Room::DescriptionEn).not_null())
                    .col(text(Room::MainImageUrl).not_null())
                    .col(string_len(Room::PriceTr, 64).not_null())
                    .col(string_len(Room::PriceEn, 64).not_null())
                    .col(integer(Room::Capacity).not_null())
                    .col(integer(Room::Size).not_null())
                    .col(json_binary(Room::FeaturesTr).not_null())
                    .col(json_binary(Room::FeaturesEn).not_null())
                    .col(string_len(Room::Type, 64).not_null())
                    // Legacy rows predate room_types, so the FK is nullable
                    .col(ColumnDef::new(Room::RoomTypeId).uuid().null())
                    .col(boolean(Room::Active).not_null().default(true))
                    .col(integer(Room::OrderNumber).not_null())
                    .col(timestamp_with_time_zone(Room::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Room::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type")
                            .from(Room::Table, Room::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Room::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    NameTr,
    NameEn,
    DescriptionTr,
    DescriptionEn,
    MainImageUrl,
    PriceTr,
    PriceEn,
    Capacity,
    Size,
    FeaturesTr,
    FeaturesEn,
    Type,
    RoomTypeId,
    Active,
    OrderNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RoomType {
    #[sea_orm(iden = "room_types")]
    Table,
    Id,
}
