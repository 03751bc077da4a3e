//! Hero slider CRUD. Slides carry both languages; video slides keep the
//! image as their poster frame.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;
use uuid::Uuid;

use models::slider_item;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderView {
    pub id: Uuid,
    #[serde(rename = "titleTR")]
    pub title_tr: String,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "subtitleTR")]
    pub subtitle_tr: String,
    #[serde(rename = "subtitleEN")]
    pub subtitle_en: String,
    #[serde(rename = "descriptionTR")]
    pub description_tr: String,
    #[serde(rename = "descriptionEN")]
    pub description_en: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    pub active: bool,
    #[serde(rename = "orderNumber")]
    pub order_number: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SliderInput {
    #[serde(rename = "titleTR", default)]
    pub title_tr: String,
    #[serde(rename = "titleEN", default)]
    pub title_en: String,
    #[serde(rename = "subtitleTR", default)]
    pub subtitle_tr: String,
    #[serde(rename = "subtitleEN", default)]
    pub subtitle_en: String,
    #[serde(rename = "descriptionTR", default)]
    pub description_tr: String,
    #[serde(rename = "descriptionEN", default)]
    pub description_en: String,
    #[serde(rename = "imageUrl", alias = "image", default)]
    pub image_url: String,
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(rename = "orderNumber", alias = "order", default)]
    pub order_number: Option<i32>,
}

fn default_active() -> bool {
    true
}

/// Distinguishes an absent field (outer `None`) from an explicit `null`
/// (`Some(None)`), so PUT can clear the video URL.
fn double_option<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SliderPatch {
    pub id: Option<Uuid>,
    #[serde(rename = "titleTR")]
    pub title_tr: Option<String>,
    #[serde(rename = "titleEN")]
    pub title_en: Option<String>,
    #[serde(rename = "subtitleTR")]
    pub subtitle_tr: Option<String>,
    #[serde(rename = "subtitleEN")]
    pub subtitle_en: Option<String>,
    #[serde(rename = "descriptionTR")]
    pub description_tr: Option<String>,
    #[serde(rename = "descriptionEN")]
    pub description_en: Option<String>,
    #[serde(rename = "imageUrl", alias = "image")]
    pub image_url: Option<String>,
    #[serde(rename = "videoUrl", default, deserialize_with = "double_option")]
    pub video_url: Option<Option<String>>,
    pub active: Option<bool>,
    #[serde(rename = "orderNumber", alias = "order")]
    pub order_number: Option<i32>,
}

fn to_view(row: slider_item::Model) -> SliderView {
    SliderView {
        id: row.id,
        title_tr: row.title_tr,
        title_en: row.title_en,
        subtitle_tr: row.subtitle_tr,
        subtitle_en: row.subtitle_en,
        description_tr: row.description_tr,
        description_en: row.description_en,
        image_url: row.image_url,
        video_url: row.video_url,
        active: row.active,
        order_number: row.order_number,
    }
}

/// Active slides in display order, for the public endpoint.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<SliderView>, ServiceError> {
    let rows = slider_item::Entity::find()
        .filter(slider_item::Column::Active.eq(true))
        .order_by_asc(slider_item::Column::OrderNumber)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(to_view).collect())
}

/// All slides in display order, for the admin list.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<SliderView>, ServiceError> {
    let rows = slider_item::Entity::find()
        .order_by_asc(slider_item::Column::OrderNumber)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(to_view).collect())
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<SliderView, ServiceError> {
    let row = slider_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("slider item"))?;
    Ok(to_view(row))
}

pub async fn create(db: &DatabaseConnection, input: SliderInput) -> Result<SliderView, ServiceError> {
    if input.title_tr.trim().is_empty() && input.title_en.trim().is_empty() {
        return Err(ServiceError::Validation(
            "slider title required (TR or EN)".into(),
        ));
    }
    if input.image_url.trim().is_empty() {
        return Err(ServiceError::Validation("slider image required".into()));
    }

    let order_number = match input.order_number {
        Some(n) if n > 0 => n,
        _ => {
            let last = slider_item::Entity::find()
                .order_by_desc(slider_item::Column::OrderNumber)
                .one(db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            last.map(|s| s.order_number + 1).unwrap_or(1)
        }
    };
    let now = Utc::now().into();
    let am = slider_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        title_tr: Set(input.title_tr),
        title_en: Set(input.title_en),
        subtitle_tr: Set(input.subtitle_tr),
        subtitle_en: Set(input.subtitle_en),
        description_tr: Set(input.description_tr),
        description_en: Set(input.description_en),
        image_url: Set(input.image_url),
        video_url: Set(input.video_url),
        active: Set(input.active),
        order_number: Set(order_number),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let row = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(slider_id = %row.id, "slider item created");
    Ok(to_view(row))
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    patch: SliderPatch,
) -> Result<SliderView, ServiceError> {
    let existing = slider_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("slider item"))?;

    let mut am: slider_item::ActiveModel = existing.into();
    if let Some(v) = patch.title_tr {
        am.title_tr = Set(v);
    }
    if let Some(v) = patch.title_en {
        am.title_en = Set(v);
    }
    if let Some(v) = patch.subtitle_tr {
        am.subtitle_tr = Set(v);
    }
    if let Some(v) = patch.subtitle_en {
        am.subtitle_en = Set(v);
    }
    if let Some(v) = patch.description_tr {
        am.description_tr = Set(v);
    }
    if let Some(v) = patch.description_en {
        am.description_en = Set(v);
    }
    if let Some(v) = patch.image_url {
        if v.trim().is_empty() {
            return Err(ServiceError::Validation("slider image required".into()));
        }
        am.image_url = Set(v);
    }
    if let Some(v) = patch.video_url {
        am.video_url = Set(v);
    }
    if let Some(v) = patch.active {
        am.active = Set(v);
    }
    if let Some(v) = patch.order_number {
        am.order_number = Set(v);
    }
    am.updated_at = Set(Utc::now().into());
    let row = am
        .update(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(slider_id = %id, "slider item updated");
    Ok(to_view(row))
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let existing = slider_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("slider item"))?;
    slider_item::Entity::delete_by_id(existing.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(slider_id = %id, "slider item deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_active_true() {
        let input: SliderInput =
            serde_json::from_str(r#"{"titleTR":"Merhaba","imageUrl":"https://cdn/a.jpg"}"#)
                .unwrap();
        assert!(input.active);
        assert!(input.video_url.is_none());
    }

    #[test]
    fn patch_clears_video_url_with_null() {
        let patch: SliderPatch = serde_json::from_str(r#"{"videoUrl":null}"#).unwrap();
        assert_eq!(patch.video_url, Some(None));

        let patch: SliderPatch = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(patch.video_url, None);
    }
}
