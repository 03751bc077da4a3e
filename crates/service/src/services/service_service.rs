//! Hotel services (spa, restaurant, ...) and their galleries. The pages are
//! content-managed only through gallery updates; titles and descriptions are
//! seeded with the database.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::{service, service_gallery};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceView {
    pub id: Uuid,
    #[serde(rename = "titleTR")]
    pub title_tr: String,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "descriptionTR")]
    pub description_tr: String,
    #[serde(rename = "descriptionEN")]
    pub description_en: String,
    #[serde(rename = "mainImageUrl")]
    pub main_image_url: String,
    pub active: bool,
    #[serde(rename = "orderNumber")]
    pub order_number: i32,
    pub gallery: Vec<ServiceGalleryImage>,
}

/// Gallery rows keep their ids exposed so the admin UI can delete by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceGalleryImage {
    pub id: Uuid,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "orderNumber")]
    pub order_number: i32,
}

fn to_view(row: service::Model, gallery: Vec<service_gallery::Model>) -> ServiceView {
    ServiceView {
        id: row.id,
        title_tr: row.title_tr,
        title_en: row.title_en,
        description_tr: row.description_tr,
        description_en: row.description_en,
        main_image_url: row.main_image_url,
        active: row.active,
        order_number: row.order_number,
        gallery: gallery
            .into_iter()
            .map(|g| ServiceGalleryImage {
                id: g.id,
                image_url: g.image_url,
                order_number: g.order_number,
            })
            .collect(),
    }
}

async fn gallery_rows(
    db: &DatabaseConnection,
    service_id: Uuid,
) -> Result<Vec<service_gallery::Model>, ServiceError> {
    service_gallery::Entity::find()
        .filter(service_gallery::Column::ServiceId.eq(service_id))
        .order_by_asc(service_gallery::Column::OrderNumber)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Active services in display order, galleries included.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<ServiceView>, ServiceError> {
    let pairs = service::Entity::find()
        .filter(service::Column::Active.eq(true))
        .find_with_related(service_gallery::Entity)
        .order_by_asc(service::Column::OrderNumber)
        .order_by_asc(service_gallery::Column::OrderNumber)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(pairs
        .into_iter()
        .map(|(row, gallery)| to_view(row, gallery))
        .collect())
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<ServiceView, ServiceError> {
    let row = service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?;
    let gallery = gallery_rows(db, id).await?;
    Ok(to_view(row, gallery))
}

pub async fn gallery_list(
    db: &DatabaseConnection,
    service_id: Uuid,
) -> Result<Vec<ServiceGalleryImage>, ServiceError> {
    service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?;
    let rows = gallery_rows(db, service_id).await?;
    Ok(rows
        .into_iter()
        .map(|g| ServiceGalleryImage {
            id: g.id,
            image_url: g.image_url,
            order_number: g.order_number,
        })
        .collect())
}

/// Append one image at max(order)+1.
pub async fn gallery_add(
    db: &DatabaseConnection,
    service_id: Uuid,
    image_url: &str,
) -> Result<ServiceGalleryImage, ServiceError> {
    if image_url.trim().is_empty() {
        return Err(ServiceError::Validation("image URL required".into()));
    }
    service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?;

    let rows = gallery_rows(db, service_id).await?;
    let next = rows.iter().map(|g| g.order_number).max().unwrap_or(0) + 1;

    let am = service_gallery::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(service_id),
        image_url: Set(image_url.to_string()),
        order_number: Set(next),
        created_at: Set(Utc::now().into()),
    };
    let row = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(service_id = %service_id, "service gallery image added");
    Ok(ServiceGalleryImage {
        id: row.id,
        image_url: row.image_url,
        order_number: row.order_number,
    })
}

/// Delete one gallery image by id, then renumber the remainder 1..n.
pub async fn gallery_remove(
    db: &DatabaseConnection,
    service_id: Uuid,
    image_id: Uuid,
) -> Result<(), ServiceError> {
    let target = service_gallery::Entity::find_by_id(image_id)
        .filter(service_gallery::Column::ServiceId.eq(service_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("gallery image"))?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    service_gallery::Entity::delete_by_id(target.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let remaining = service_gallery::Entity::find()
        .filter(service_gallery::Column::ServiceId.eq(service_id))
        .order_by_asc(service_gallery::Column::OrderNumber)
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    for (i, row) in remaining.into_iter().enumerate() {
        let expected = (i + 1) as i32;
        if row.order_number != expected {
            let mut am: service_gallery::ActiveModel = row.into();
            am.order_number = Set(expected);
            am.update(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
        }
    }
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(service_id = %service_id, image_id = %image_id, "service gallery image removed");
    Ok(())
}

/// Replace the whole gallery. Blank URLs are filtered out; if nothing valid
/// remains the request is rejected. The first URL becomes the service's main
/// image.
pub async fn gallery_replace(
    db: &DatabaseConnection,
    service_id: Uuid,
    images: Vec<String>,
) -> Result<ServiceView, ServiceError> {
    let existing = service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?;

    let valid: Vec<String> = images
        .into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();
    if valid.is_empty() {
        return Err(ServiceError::Validation(
            "gallery must contain at least one valid image URL".into(),
        ));
    }

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    service_gallery::Entity::delete_many()
        .filter(service_gallery::Column::ServiceId.eq(service_id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let now = Utc::now().into();
    for (i, url) in valid.iter().enumerate() {
        let am = service_gallery::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            image_url: Set(url.clone()),
            order_number: Set((i + 1) as i32),
            created_at: Set(now),
        };
        am.insert(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    let mut am: service::ActiveModel = existing.into();
    am.main_image_url = Set(valid[0].clone());
    am.updated_at = Set(now);
    am.update(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(service_id = %service_id, count = valid.len(), "service gallery replaced");
    get(db, service_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_service(db: &DatabaseConnection) -> service::Model {
        let now = Utc::now().into();
        service::ActiveModel {
            id: Set(Uuid::new_v4()),
            title_tr: Set("Spa".into()),
            title_en: Set("Spa".into()),
            description_tr: Set(String::new()),
            description_en: Set(String::new()),
            main_image_url: Set("https://cdn.example.com/spa/old.jpg".into()),
            active: Set(true),
            order_number: Set(99),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("seed service")
    }

    async fn cleanup(db: &DatabaseConnection, service_id: Uuid) {
        service_gallery::Entity::delete_many()
            .filter(service_gallery::Column::ServiceId.eq(service_id))
            .exec(db)
            .await
            .expect("cleanup gallery");
        service::Entity::delete_by_id(service_id)
            .exec(db)
            .await
            .expect("cleanup service");
    }

    #[tokio::test]
    async fn gallery_replace_add_and_remove() {
        let Some(db) = crate::test_support::get_db().await else {
            return;
        };
        let svc = seed_service(&db).await;

        // nothing but blanks is rejected
        let err = gallery_replace(&db, svc.id, vec!["  ".into(), String::new()]).await;
        assert!(matches!(err, Err(ServiceError::Validation(_))));

        // blanks filtered, URLs trimmed, first image becomes the main image
        let view = gallery_replace(
            &db,
            svc.id,
            vec![
                " https://cdn.example.com/spa/1.jpg ".into(),
                String::new(),
                "https://cdn.example.com/spa/2.jpg".into(),
            ],
        )
        .await
        .expect("replace");
        assert_eq!(view.gallery.len(), 2);
        assert_eq!(view.main_image_url, "https://cdn.example.com/spa/1.jpg");
        assert_eq!(view.gallery[0].order_number, 1);
        assert_eq!(view.gallery[1].order_number, 2);

        // append lands at max(order)+1
        let added = gallery_add(&db, svc.id, "https://cdn.example.com/spa/3.jpg")
            .await
            .expect("add");
        assert_eq!(added.order_number, 3);

        // image ids belong to their service
        assert!(gallery_remove(&db, Uuid::new_v4(), added.id).await.is_err());

        // removing the first image renumbers survivors 1..n
        gallery_remove(&db, svc.id, view.gallery[0].id)
            .await
            .expect("remove");
        let rows = gallery_list(&db, svc.id).await.expect("list");
        let orders: Vec<i32> = rows.iter().map(|r| r.order_number).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(rows[0].image_url, "https://cdn.example.com/spa/2.jpg");

        cleanup(&db, svc.id).await;
    }
}
