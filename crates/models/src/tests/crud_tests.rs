use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{db, room, room_gallery, room_type};

fn sample_room(order: i32) -> room::ActiveModel {
    let now = Utc::now().into();
    room::ActiveModel {
        id: Set(Uuid::new_v4()),
        name_tr: Set("Standart Oda".into()),
        name_en: Set("Standard Room".into()),
        description_tr: Set("Konforlu oda".into()),
        description_en: Set("Comfortable room".into()),
        main_image_url: Set("https://cdn.example.com/rooms/std.jpg".into()),
        price_tr: Set("2500 TL".into()),
        price_en: Set("90 EUR".into()),
        capacity: Set(2),
        size: Set(26),
        features_tr: Set(serde_json::json!(["Klima", "WiFi"])),
        features_en: Set(serde_json::json!(["AC", "WiFi"])),
        r#type: Set("standard".into()),
        room_type_id: Set(None),
        active: Set(true),
        order_number: Set(order),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[tokio::test]
async fn room_and_gallery_crud() {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return;
    }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return;
    }

    let rt = room_type::create(&db, "Standart", "Standard").await.expect("create room type");
    assert!(rt.active);

    let r = sample_room(room::next_order_number(&db).await.expect("next order"))
        .insert(&db)
        .await
        .expect("insert room");

    let g = room_gallery::ActiveModel {
        id: Set(Uuid::new_v4()),
        room_id: Set(r.id),
        image_url: Set("https://cdn.example.com/rooms/std-1.jpg".into()),
        order_number: Set(1),
        created_at: Set(Utc::now().into()),
    }
    .insert(&db)
    .await
    .expect("insert gallery row");
    assert_eq!(g.room_id, r.id);

    // cascade removes the gallery row
    room::Entity::delete_by_id(r.id).exec(&db).await.expect("delete room");
    let orphan = room_gallery::Entity::find_by_id(g.id).one(&db).await.expect("query gallery");
    assert!(orphan.is_none());

    room_type::Entity::delete_by_id(rt.id).exec(&db).await.expect("delete room type");
}

#[tokio::test]
async fn room_type_requires_a_name() {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return;
    }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return;
        }
    };
    let err = room_type::create(&db, " ", "").await;
    assert!(err.is_err());
}
