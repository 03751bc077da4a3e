//! Create `services` table (hotel services/amenities pages).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(string_len(Service::TitleTr, 255).not_null())
                    .col(string_len(Service::TitleEn, 255).not_null())
                    .col(text(Service::DescriptionTr).not_null())
                    .col(text(Service::DescriptionEn).not_null())
                    .col(text(Service::MainImageUrl).not_null())
                    .col(boolean(Service::Active).not_null().default(true))
                    .col(integer(Service::OrderNumber).not_null())
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    #[sea_orm(iden = "services")]
    Table,
    Id,
    TitleTr,
    TitleEn,
    DescriptionTr,
    DescriptionEn,
    MainImageUrl,
    Active,
    OrderNumber,
    CreatedAt,
    UpdatedAt,
}
