//! Create `service_gallery` table with FK to `services`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceGallery::Table)
                    .if_not_exists()
                    .col(uuid(ServiceGallery::Id).primary_key())
                    .col(uuid(ServiceGallery::ServiceId).not_null())
                    .col(text(ServiceGallery::ImageUrl).not_null())
                    .col(integer(ServiceGallery::OrderNumber).not_null())
                    .col(timestamp_with_time_zone(ServiceGallery::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_gallery_service")
                            .from(ServiceGallery::Table, ServiceGallery::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceGallery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum ServiceGallery {
    #[sea_orm(iden = "service_gallery")]
    Table,
    Id,
    ServiceId,
    ImageUrl,
    OrderNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Service {
    #[sea_orm(iden = "services")]
    Table,
    Id,
}
