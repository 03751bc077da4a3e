//! Room type CRUD for the admin back-office.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::room_type;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeView {
    pub id: Uuid,
    #[serde(rename = "nameTR")]
    pub name_tr: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomTypeInput {
    #[serde(rename = "nameTR", default)]
    pub name_tr: String,
    #[serde(rename = "nameEN", default)]
    pub name_en: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomTypePatch {
    #[serde(rename = "nameTR")]
    pub name_tr: Option<String>,
    #[serde(rename = "nameEN")]
    pub name_en: Option<String>,
    pub active: Option<bool>,
}

fn to_view(row: room_type::Model) -> RoomTypeView {
    RoomTypeView {
        id: row.id,
        name_tr: row.name_tr,
        name_en: row.name_en,
        active: row.active,
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<RoomTypeView>, ServiceError> {
    let rows = room_type::Entity::find()
        .order_by_asc(room_type::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(to_view).collect())
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<RoomTypeView, ServiceError> {
    let row = room_type::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room type"))?;
    Ok(to_view(row))
}

pub async fn create(
    db: &DatabaseConnection,
    input: RoomTypeInput,
) -> Result<RoomTypeView, ServiceError> {
    let row = room_type::create(db, &input.name_tr, &input.name_en).await?;
    info!(room_type_id = %row.id, "room type created");
    Ok(to_view(row))
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    patch: RoomTypePatch,
) -> Result<RoomTypeView, ServiceError> {
    let existing = room_type::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room type"))?;

    let mut am: room_type::ActiveModel = existing.into();
    if let Some(v) = patch.name_tr {
        am.name_tr = Set(v);
    }
    if let Some(v) = patch.name_en {
        am.name_en = Set(v);
    }
    if let Some(v) = patch.active {
        am.active = Set(v);
    }
    am.updated_at = Set(Utc::now().into());
    let row = am
        .update(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(room_type_id = %id, "room type updated");
    Ok(to_view(row))
}

/// Delete a room type. Rooms referencing it fall back to NULL via the FK.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let existing = room_type::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room type"))?;
    room_type::Entity::delete_by_id(existing.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(room_type_id = %id, "room type deleted");
    Ok(())
}
