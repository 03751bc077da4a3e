use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{room_gallery, room_type};

/// A room listing. Both languages live on the same row; `features_*` are
/// JSON arrays of strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name_tr: String,
    pub name_en: String,
    pub description_tr: String,
    pub description_en: String,
    pub main_image_url: String,
    pub price_tr: String,
    pub price_en: String,
    pub capacity: i32,
    pub size: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub features_tr: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub features_en: Json,
    /// Legacy discriminator ("standard", "suite", ...) kept for slug lookups.
    pub r#type: String,
    pub room_type_id: Option<Uuid>,
    pub active: bool,
    pub order_number: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Gallery,
    RoomType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Gallery => Entity::has_many(room_gallery::Entity).into(),
            Relation::RoomType => Entity::belongs_to(room_type::Entity)
                .from(Column::RoomTypeId)
                .to(room_type::Column::Id)
                .into(),
        }
    }
}

impl Related<room_gallery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gallery.def()
    }
}

impl Related<room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_names(name_tr: &str, name_en: &str) -> Result<(), ModelError> {
    if name_tr.trim().is_empty() && name_en.trim().is_empty() {
        return Err(ModelError::Validation("room name required (TR or EN)".into()));
    }
    Ok(())
}

/// Next free order_number (1-based, rooms ordered tail-append).
pub async fn next_order_number(db: &DatabaseConnection) -> Result<i32, ModelError> {
    let last = Entity::find()
        .order_by_desc(Column::OrderNumber)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(last.map(|r| r.order_number + 1).unwrap_or(1))
}

/// Renumber all rooms 1..n preserving their current order. Runs inside the
/// caller's transaction.
pub async fn renumber<C: ConnectionTrait>(conn: &C) -> Result<(), ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::OrderNumber)
        .all(conn)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    for (i, row) in rows.into_iter().enumerate() {
        let expected = (i + 1) as i32;
        if row.order_number != expected {
            let mut am: ActiveModel = row.into();
            am.order_number = Set(expected);
            am.update(conn).await.map_err(|e| ModelError::Db(e.to_string()))?;
        }
    }
    Ok(())
}
