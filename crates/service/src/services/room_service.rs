//! Room CRUD, gallery management and bulk import.
//!
//! The public JSON shape keeps the field names the site's frontend already
//! consumes: camelCase with `image`/`mainImageUrl` and `order`/`orderNumber`
//! duplicated for older pages.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use models::{room, room_gallery};

use crate::errors::ServiceError;

/// Room as the frontend sees it, gallery aggregated in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomView {
    pub id: Uuid,
    #[serde(rename = "nameTR")]
    pub name_tr: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    #[serde(rename = "descriptionTR")]
    pub description_tr: String,
    #[serde(rename = "descriptionEN")]
    pub description_en: String,
    pub image: String,
    #[serde(rename = "mainImageUrl")]
    pub main_image_url: String,
    #[serde(rename = "priceTR")]
    pub price_tr: String,
    #[serde(rename = "priceEN")]
    pub price_en: String,
    pub capacity: i32,
    pub size: i32,
    #[serde(rename = "featuresTR")]
    pub features_tr: Vec<String>,
    #[serde(rename = "featuresEN")]
    pub features_en: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "roomTypeId")]
    pub room_type_id: Option<Uuid>,
    pub active: bool,
    pub order: i32,
    #[serde(rename = "orderNumber")]
    pub order_number: i32,
    pub gallery: Vec<String>,
}

/// Create payload. At least one of the names must be non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomInput {
    #[serde(rename = "nameTR", default)]
    pub name_tr: String,
    #[serde(rename = "nameEN", default)]
    pub name_en: String,
    #[serde(rename = "descriptionTR", default)]
    pub description_tr: String,
    #[serde(rename = "descriptionEN", default)]
    pub description_en: String,
    #[serde(rename = "mainImageUrl", alias = "image", default)]
    pub main_image_url: String,
    #[serde(rename = "priceTR", default)]
    pub price_tr: String,
    #[serde(rename = "priceEN", default)]
    pub price_en: String,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub size: i32,
    #[serde(rename = "featuresTR", default)]
    pub features_tr: Vec<String>,
    #[serde(rename = "featuresEN", default)]
    pub features_en: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "roomTypeId", default)]
    pub room_type_id: Option<Uuid>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(rename = "orderNumber", alias = "order", default)]
    pub order_number: Option<i32>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

fn default_active() -> bool {
    true
}

/// Absent field stays untouched (outer `None`); explicit `null` detaches the
/// room from its type (`Some(None)`).
fn double_option<'de, D>(de: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Uuid>::deserialize(de).map(Some)
}

/// Partial update payload; only present fields are applied. A present
/// `gallery` replaces the whole gallery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomPatch {
    #[serde(rename = "nameTR")]
    pub name_tr: Option<String>,
    #[serde(rename = "nameEN")]
    pub name_en: Option<String>,
    #[serde(rename = "descriptionTR")]
    pub description_tr: Option<String>,
    #[serde(rename = "descriptionEN")]
    pub description_en: Option<String>,
    #[serde(rename = "mainImageUrl", alias = "image")]
    pub main_image_url: Option<String>,
    #[serde(rename = "priceTR")]
    pub price_tr: Option<String>,
    #[serde(rename = "priceEN")]
    pub price_en: Option<String>,
    pub capacity: Option<i32>,
    pub size: Option<i32>,
    #[serde(rename = "featuresTR")]
    pub features_tr: Option<Vec<String>>,
    #[serde(rename = "featuresEN")]
    pub features_en: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "roomTypeId", default, deserialize_with = "double_option")]
    pub room_type_id: Option<Option<Uuid>>,
    pub active: Option<bool>,
    #[serde(rename = "orderNumber", alias = "order")]
    pub order_number: Option<i32>,
    pub gallery: Option<Vec<String>>,
}

/// Gallery endpoint view: the main image plus ordered gallery URLs.
#[derive(Debug, Clone, Serialize)]
pub struct RoomGalleryView {
    #[serde(rename = "mainImageUrl")]
    pub main_image_url: String,
    pub images: Vec<String>,
}

fn features_to_vec(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn to_view(row: room::Model, gallery: Vec<String>) -> RoomView {
    RoomView {
        id: row.id,
        name_tr: row.name_tr,
        name_en: row.name_en,
        description_tr: row.description_tr,
        description_en: row.description_en,
        image: row.main_image_url.clone(),
        main_image_url: row.main_image_url,
        price_tr: row.price_tr,
        price_en: row.price_en,
        capacity: row.capacity,
        size: row.size,
        features_tr: features_to_vec(&row.features_tr),
        features_en: features_to_vec(&row.features_en),
        kind: row.r#type,
        room_type_id: row.room_type_id,
        active: row.active,
        order: row.order_number,
        order_number: row.order_number,
        gallery,
    }
}

async fn gallery_urls(db: &DatabaseConnection, room_id: Uuid) -> Result<Vec<String>, ServiceError> {
    let rows = room_gallery::Entity::find()
        .filter(room_gallery::Column::RoomId.eq(room_id))
        .order_by_asc(room_gallery::Column::OrderNumber)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(|g| g.image_url).collect())
}

/// List rooms ordered by order_number, inactive rooms filtered out unless
/// requested, each with its gallery aggregated.
pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> Result<Vec<RoomView>, ServiceError> {
    let mut query = room::Entity::find();
    if !include_inactive {
        query = query.filter(room::Column::Active.eq(true));
    }
    let pairs = query
        .find_with_related(room_gallery::Entity)
        .order_by_asc(room::Column::OrderNumber)
        .order_by_asc(room_gallery::Column::OrderNumber)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(pairs
        .into_iter()
        .map(|(row, gallery)| to_view(row, gallery.into_iter().map(|g| g.image_url).collect()))
        .collect())
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<RoomView, ServiceError> {
    let row = room::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room"))?;
    let gallery = gallery_urls(db, id).await?;
    Ok(to_view(row, gallery))
}

pub async fn create(db: &DatabaseConnection, input: RoomInput) -> Result<RoomView, ServiceError> {
    room::validate_names(&input.name_tr, &input.name_en)?;

    let order_number = match input.order_number {
        Some(n) if n > 0 => n,
        _ => room::next_order_number(db).await?,
    };
    let now = Utc::now().into();
    let id = Uuid::new_v4();

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = room::ActiveModel {
        id: Set(id),
        name_tr: Set(input.name_tr),
        name_en: Set(input.name_en),
        description_tr: Set(input.description_tr),
        description_en: Set(input.description_en),
        main_image_url: Set(input.main_image_url),
        price_tr: Set(input.price_tr),
        price_en: Set(input.price_en),
        capacity: Set(input.capacity),
        size: Set(input.size),
        features_tr: Set(json!(input.features_tr)),
        features_en: Set(json!(input.features_en)),
        r#type: Set(input.kind),
        room_type_id: Set(input.room_type_id),
        active: Set(input.active),
        order_number: Set(order_number),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let row = am
        .insert(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    insert_gallery(&txn, id, &input.gallery).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(room_id = %id, "room created");
    let gallery = gallery_urls(db, id).await?;
    Ok(to_view(row, gallery))
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    patch: RoomPatch,
) -> Result<RoomView, ServiceError> {
    let existing = room::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room"))?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut am: room::ActiveModel = existing.into();
    if let Some(v) = patch.name_tr {
        am.name_tr = Set(v);
    }
    if let Some(v) = patch.name_en {
        am.name_en = Set(v);
    }
    if let Some(v) = patch.description_tr {
        am.description_tr = Set(v);
    }
    if let Some(v) = patch.description_en {
        am.description_en = Set(v);
    }
    if let Some(v) = patch.main_image_url {
        am.main_image_url = Set(v);
    }
    if let Some(v) = patch.price_tr {
        am.price_tr = Set(v);
    }
    if let Some(v) = patch.price_en {
        am.price_en = Set(v);
    }
    if let Some(v) = patch.capacity {
        am.capacity = Set(v);
    }
    if let Some(v) = patch.size {
        am.size = Set(v);
    }
    if let Some(v) = patch.features_tr {
        am.features_tr = Set(json!(v));
    }
    if let Some(v) = patch.features_en {
        am.features_en = Set(json!(v));
    }
    if let Some(v) = patch.kind {
        am.r#type = Set(v);
    }
    if let Some(v) = patch.room_type_id {
        am.room_type_id = Set(v);
    }
    if let Some(v) = patch.active {
        am.active = Set(v);
    }
    if let Some(v) = patch.order_number {
        am.order_number = Set(v);
    }
    am.updated_at = Set(Utc::now().into());
    let row = am
        .update(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    if let Some(urls) = patch.gallery {
        room_gallery::Entity::delete_many()
            .filter(room_gallery::Column::RoomId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        insert_gallery(&txn, id, &urls).await?;
    }

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(room_id = %id, "room updated");
    let gallery = gallery_urls(db, id).await?;
    Ok(to_view(row, gallery))
}

/// Delete a room and its gallery, then close the order_number gap.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let existing = room::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room"))?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    room_gallery::Entity::delete_many()
        .filter(room_gallery::Column::RoomId.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    room::Entity::delete_by_id(existing.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    room::renumber(&txn).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(room_id = %id, "room deleted");
    Ok(())
}

async fn insert_gallery<C: sea_orm::ConnectionTrait>(
    conn: &C,
    room_id: Uuid,
    urls: &[String],
) -> Result<(), ServiceError> {
    let now = Utc::now().into();
    for (i, url) in urls.iter().filter(|u| !u.trim().is_empty()).enumerate() {
        let am = room_gallery::ActiveModel {
            id: Set(Uuid::new_v4()),
            room_id: Set(room_id),
            image_url: Set(url.clone()),
            order_number: Set((i + 1) as i32),
            created_at: Set(now),
        };
        am.insert(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    Ok(())
}

pub async fn gallery_get(
    db: &DatabaseConnection,
    room_id: Uuid,
) -> Result<RoomGalleryView, ServiceError> {
    let row = room::Entity::find_by_id(room_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room"))?;
    let images = gallery_urls(db, room_id).await?;
    Ok(RoomGalleryView {
        main_image_url: row.main_image_url,
        images,
    })
}

/// Replace the whole gallery, optionally also swapping the main image.
pub async fn gallery_replace(
    db: &DatabaseConnection,
    room_id: Uuid,
    images: Vec<String>,
    main_image_url: Option<String>,
) -> Result<RoomGalleryView, ServiceError> {
    let existing = room::Entity::find_by_id(room_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room"))?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Some(url) = main_image_url {
        let mut am: room::ActiveModel = existing.into();
        am.main_image_url = Set(url);
        am.updated_at = Set(Utc::now().into());
        am.update(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    room_gallery::Entity::delete_many()
        .filter(room_gallery::Column::RoomId.eq(room_id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    insert_gallery(&txn, room_id, &images).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(room_id = %room_id, count = images.len(), "room gallery replaced");
    gallery_get(db, room_id).await
}

/// Append one image at the end of the gallery. Duplicate URLs are rejected.
pub async fn gallery_add(
    db: &DatabaseConnection,
    room_id: Uuid,
    image_url: &str,
) -> Result<RoomGalleryView, ServiceError> {
    if image_url.trim().is_empty() {
        return Err(ServiceError::Validation("image URL required".into()));
    }
    room::Entity::find_by_id(room_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("room"))?;

    let rows = room_gallery::Entity::find()
        .filter(room_gallery::Column::RoomId.eq(room_id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if rows.iter().any(|g| g.image_url == image_url) {
        return Err(ServiceError::Validation(
            "image already exists in gallery".into(),
        ));
    }
    let next = rows.iter().map(|g| g.order_number).max().unwrap_or(0) + 1;

    let am = room_gallery::ActiveModel {
        id: Set(Uuid::new_v4()),
        room_id: Set(room_id),
        image_url: Set(image_url.to_string()),
        order_number: Set(next),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(room_id = %room_id, "gallery image added");
    gallery_get(db, room_id).await
}

/// Remove one gallery image by URL and renumber the rest 1..n.
pub async fn gallery_remove(
    db: &DatabaseConnection,
    room_id: Uuid,
    image_url: &str,
) -> Result<RoomGalleryView, ServiceError> {
    let target = room_gallery::Entity::find()
        .filter(room_gallery::Column::RoomId.eq(room_id))
        .filter(room_gallery::Column::ImageUrl.eq(image_url))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("gallery image"))?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    room_gallery::Entity::delete_by_id(target.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let remaining = room_gallery::Entity::find()
        .filter(room_gallery::Column::RoomId.eq(room_id))
        .order_by_asc(room_gallery::Column::OrderNumber)
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    for (i, row) in remaining.into_iter().enumerate() {
        let expected = (i + 1) as i32;
        if row.order_number != expected {
            let mut am: room_gallery::ActiveModel = row.into();
            am.order_number = Set(expected);
            am.update(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
        }
    }
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(room_id = %room_id, "gallery image removed");
    gallery_get(db, room_id).await
}

/// Seed/import: replaces the whole rooms table (galleries included) with the
/// supplied records in one transaction.
pub async fn import(
    db: &DatabaseConnection,
    records: Vec<RoomInput>,
) -> Result<Vec<RoomView>, ServiceError> {
    for record in &records {
        room::validate_names(&record.name_tr, &record.name_en)?;
    }

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    room_gallery::Entity::delete_many()
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    room::Entity::delete_many()
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut out = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let id = Uuid::new_v4();
        let now = Utc::now().into();
        let order_number = record.order_number.unwrap_or((i + 1) as i32);
        let gallery: Vec<String> = record
            .gallery
            .iter()
            .filter(|u| !u.trim().is_empty())
            .cloned()
            .collect();
        let am = room::ActiveModel {
            id: Set(id),
            name_tr: Set(record.name_tr),
            name_en: Set(record.name_en),
            description_tr: Set(record.description_tr),
            description_en: Set(record.description_en),
            main_image_url: Set(record.main_image_url),
            price_tr: Set(record.price_tr),
            price_en: Set(record.price_en),
            capacity: Set(record.capacity),
            size: Set(record.size),
            features_tr: Set(json!(record.features_tr)),
            features_en: Set(json!(record.features_en)),
            r#type: Set(record.kind),
            room_type_id: Set(record.room_type_id),
            active: Set(record.active),
            order_number: Set(order_number),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let row = am
            .insert(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        insert_gallery(&txn, id, &gallery).await?;
        out.push(to_view(row, gallery));
    }
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(count = out.len(), "rooms imported");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_with_frontend_keys() {
        let view = RoomView {
            id: Uuid::nil(),
            name_tr: "Standart Oda".into(),
            name_en: "Standard Room".into(),
            description_tr: String::new(),
            description_en: String::new(),
            image: "https://cdn/x.jpg".into(),
            main_image_url: "https://cdn/x.jpg".into(),
            price_tr: "1500 TL".into(),
            price_en: "50 EUR".into(),
            capacity: 2,
            size: 25,
            features_tr: vec!["Klima".into()],
            features_en: vec!["AC".into()],
            kind: "standard".into(),
            room_type_id: None,
            active: true,
            order: 1,
            order_number: 1,
            gallery: vec![],
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["nameTR"], "Standart Oda");
        assert_eq!(value["mainImageUrl"], "https://cdn/x.jpg");
        assert_eq!(value["image"], "https://cdn/x.jpg");
        assert_eq!(value["type"], "standard");
        assert_eq!(value["order"], 1);
        assert_eq!(value["orderNumber"], 1);
    }

    #[test]
    fn patch_accepts_image_and_order_aliases() {
        let patch: RoomPatch =
            serde_json::from_str(r#"{"image":"https://cdn/new.jpg","order":3}"#).unwrap();
        assert_eq!(patch.main_image_url.as_deref(), Some("https://cdn/new.jpg"));
        assert_eq!(patch.order_number, Some(3));
    }

    #[test]
    fn input_requires_some_name() {
        let input: RoomInput = serde_json::from_str(r#"{"nameTR":"","nameEN":""}"#).unwrap();
        assert!(room::validate_names(&input.name_tr, &input.name_en).is_err());
    }

    #[test]
    fn features_json_roundtrip() {
        let v = json!(["Wifi", "TV", 42]);
        assert_eq!(features_to_vec(&v), vec!["Wifi".to_string(), "TV".to_string()]);
        assert!(features_to_vec(&json!(null)).is_empty());
    }

    fn sample_input(name: &str, order: Option<i32>) -> RoomInput {
        RoomInput {
            name_tr: name.to_string(),
            name_en: name.to_string(),
            main_image_url: "https://cdn.example.com/rooms/a.jpg".into(),
            capacity: 2,
            size: 26,
            features_tr: vec!["Klima".into()],
            features_en: vec!["AC".into()],
            kind: "standard".into(),
            active: true,
            order_number: order,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn room_lifecycle_gallery_and_import() {
        let Some(db) = crate::test_support::get_db().await else {
            return;
        };

        let created = create(&db, sample_input("Test Oda", None)).await.expect("create");
        assert!(created.order_number >= 1);

        // append two gallery images, second duplicate rejected
        let view = gallery_add(&db, created.id, "https://cdn.example.com/g1.jpg")
            .await
            .expect("add image");
        assert_eq!(view.images, vec!["https://cdn.example.com/g1.jpg".to_string()]);
        assert!(gallery_add(&db, created.id, "https://cdn.example.com/g1.jpg")
            .await
            .is_err());

        // partial update leaves the gallery alone
        let updated = update(
            &db,
            created.id,
            RoomPatch {
                name_en: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
        assert_eq!(updated.name_en, "Renamed");
        assert_eq!(updated.gallery.len(), 1);

        // replacing the gallery via patch rewrites order 1..n
        let updated = update(
            &db,
            created.id,
            RoomPatch {
                gallery: Some(vec![
                    "https://cdn.example.com/g2.jpg".into(),
                    "https://cdn.example.com/g3.jpg".into(),
                ]),
                ..Default::default()
            },
        )
        .await
        .expect("replace gallery");
        assert_eq!(updated.gallery.len(), 2);

        // a second room appended after the first; deleting the first closes
        // the order gap
        let second = create(&db, sample_input("Oda B", None)).await.expect("second");
        assert!(second.order_number > created.order_number);

        delete(&db, created.id).await.expect("delete");
        assert!(get(&db, created.id).await.is_err());

        let survivors = list(&db, true).await.expect("list");
        let orders: Vec<i32> = survivors.iter().map(|r| r.order_number).collect();
        assert_eq!(orders, (1..=orders.len() as i32).collect::<Vec<_>>());

        delete(&db, second.id).await.expect("delete second");

        // import wipes the table and seeds the supplied records; blank
        // gallery URLs are dropped
        let mut record_a = sample_input("Import A", Some(1));
        record_a.gallery = vec![
            "https://cdn.example.com/imp/a1.jpg".into(),
            "   ".into(),
        ];
        let imported = import(&db, vec![record_a, sample_input("Import B", None)])
            .await
            .expect("import");
        assert_eq!(imported.len(), 2);
        assert_eq!(
            imported[0].gallery,
            vec!["https://cdn.example.com/imp/a1.jpg".to_string()]
        );
        assert_eq!(imported[1].order_number, 2);

        let all = list(&db, true).await.expect("list after import");
        assert_eq!(all.len(), 2);

        // a second import replaces, never appends
        let imported = import(&db, vec![sample_input("Import C", None)])
            .await
            .expect("second import");
        assert_eq!(imported.len(), 1);
        let all = list(&db, true).await.expect("list after second import");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name_tr, "Import C");

        for r in all {
            delete(&db, r.id).await.expect("cleanup");
        }
    }
}
