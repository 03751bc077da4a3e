//! Migrator registering table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_room_types;
mod m20240101_000002_create_rooms;
mod m20240101_000003_create_room_gallery;
mod m20240101_000004_create_slider_items;
mod m20240101_000005_create_services;
mod m20240101_000006_create_service_gallery;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_room_types::Migration),
            Box::new(m20240101_000002_create_rooms::Migration),
            Box::new(m20240101_000003_create_room_gallery::Migration),
            Box::new(m20240101_000004_create_slider_items::Migration),
            Box::new(m20240101_000005_create_services::Migration),
            Box::new(m20240101_000006_create_service_gallery::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}
