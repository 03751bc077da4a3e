//! Create `room_types` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomType::Table)
                    .if_not_exists()
                    .col(uuid(RoomType::Id).primary_key())
                    .col(string_len(RoomType::NameTr, 128).not_null())
                    .col(string_len(RoomType::NameEn, 128).not_null())
                    .col(boolean(RoomType::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(RoomType::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(RoomType::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RoomType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum RoomType {
    #[sea_orm(iden = "room_types")]
    Table,
    Id,
    NameTr,
    NameEn,
    Active,
    CreatedAt,
    UpdatedAt,
}
