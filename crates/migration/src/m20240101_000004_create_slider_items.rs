//! Create `slider_items` table for the homepage hero slider.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SliderItem::Table)
                    .if_not_exists()
                    .col(uuid(SliderItem::Id).primary_key())
                    .col(string_len(SliderItem::TitleTr, 255).not_null())
                    .col(string_len(SliderItem::TitleEn, 255).not_null())
                    .col(string_len(SliderItem::SubtitleTr, 255).not_null())
                    .col(string_len(SliderItem::SubtitleEn, 255).not_null())
                    .col(text(SliderItem::DescriptionTr).not_null())
                    .col(text(SliderItem::DescriptionEn).not_null())
                    .col(text(SliderItem::ImageUrl).not_null())
                    .col(ColumnDef::new(SliderItem::VideoUrl).text().null())
                    .col(boolean(SliderItem::Active).not_null().default(true))
                    .col(integer(SliderItem::OrderNumber).not_null())
                    .col(timestamp_with_time_zone(SliderItem::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(SliderItem::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SliderItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum SliderItem {
    #[sea_orm(iden = "slider_items")]
    Table,
    Id,
    TitleTr,
    TitleEn,
    SubtitleTr,
    SubtitleEn,
    DescriptionTr,
    DescriptionEn,
    ImageUrl,
    VideoUrl,
    Active,
    OrderNumber,
    CreatedAt,
    UpdatedAt,
}
