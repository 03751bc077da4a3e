use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hero slider entry. `video_url` is set for video slides; `image_url` is
/// always present and doubles as the poster for videos.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "slider_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title_tr: String,
    pub title_en: String,
    pub subtitle_tr: String,
    pub subtitle_en: String,
    pub description_tr: String,
    pub description_en: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub active: bool,
    pub order_number: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}
