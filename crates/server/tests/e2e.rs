use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::auth::AdminAuthService;
use service::id_map::RoomIdMap;

const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "TestPass123!";

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let auth = Arc::new(AdminAuthService::from_plain(
        ADMIN_USER,
        ADMIN_PASS,
        "test-secret",
        8,
    )?);
    let id_map = Arc::new(RoomIdMap::new());
    let state = ServerState { db, auth, store: None, id_map };
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

async fn login(c: &reqwest::Client, base: &str) -> anyhow::Result<()> {
    let res = c
        .post(format!("{}/api/admin/auth", base))
        .json(&json!({"username": ADMIN_USER, "password": ADMIN_PASS}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_room_lifecycle_via_http() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();
    login(&c, &app.base_url).await?;

    // unique type so the slug lookup cannot hit leftovers from earlier runs
    let room_type = format!("e2e{}", uuid::Uuid::new_v4().simple());

    // create
    let res = c
        .post(format!("{}/api/rooms", app.base_url))
        .json(&json!({
            "nameTR": "E2E Oda",
            "nameEN": "E2E Room",
            "mainImageUrl": "https://cdn.example.com/rooms/e2e.jpg",
            "priceTR": "1.000 TL",
            "capacity": 2,
            "size": 20,
            "featuresTR": ["Klima"],
            "featuresEN": ["AC"],
            "type": room_type.as_str(),
            "gallery": ["https://cdn.example.com/rooms/e2e-1.jpg"]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    let room_id = body["data"]["id"].as_str().expect("room id").to_string();
    assert_eq!(body["data"]["nameTR"], "E2E Oda");
    assert_eq!(body["data"]["gallery"].as_array().map(|a| a.len()), Some(1));

    // visible on the public API without auth
    let public = reqwest::Client::new();
    let res = public
        .get(format!("{}/api/public-rooms/{}", app.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // slug lookup resolves through the type column
    let res = public
        .get(format!("{}/api/public-rooms/{}-room", app.base_url, room_type))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["id"].as_str(), Some(room_id.as_str()));

    // partial update
    let res = c
        .put(format!("{}/api/rooms/{}", app.base_url, room_id))
        .json(&json!({"priceEN": "€40", "active": false}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["priceEN"], "€40");
    assert_eq!(body["data"]["active"], false);

    // inactive rooms drop out of the public list
    let res = public
        .get(format!("{}/api/public-rooms", app.base_url))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    let listed = body["data"]
        .as_array()
        .map(|rooms| rooms.iter().any(|r| r["id"].as_str() == Some(room_id.as_str())))
        .unwrap_or(false);
    assert!(!listed, "inactive room must not be listed publicly");

    // gallery append and duplicate rejection
    let res = c
        .post(format!("{}/api/rooms/gallery/{}", app.base_url, room_id))
        .json(&json!({"imageUrl": "https://cdn.example.com/rooms/e2e-2.jpg"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = c
        .post(format!("{}/api/rooms/gallery/{}", app.base_url, room_id))
        .json(&json!({"imageUrl": "https://cdn.example.com/rooms/e2e-2.jpg"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // delete
    let res = c
        .delete(format!("{}/api/rooms/{}", app.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = c
        .get(format!("{}/api/rooms/{}", app.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_slider_admin_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // admin slider denied without login
    let res = c
        .get(format!("{}/api/admin/slider", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    login(&c, &app.base_url).await?;

    // missing image -> 400
    let res = c
        .post(format!("{}/api/admin/slider", app.base_url))
        .json(&json!({"titleTR": "Başlıksız"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // create, update, delete
    let res = c
        .post(format!("{}/api/admin/slider", app.base_url))
        .json(&json!({"titleTR": "Hoşgeldiniz", "imageUrl": "https://cdn.example.com/slider/a.jpg"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let slide_id = body["data"]["id"].as_str().expect("slide id").to_string();

    let res = c
        .put(format!("{}/api/admin/slider", app.base_url))
        .json(&json!({"id": slide_id, "titleEN": "Welcome"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["titleEN"], "Welcome");

    // shows up on the public slider
    let res = reqwest::Client::new()
        .get(format!("{}/api/slider", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = c
        .delete(format!("{}/api/admin/slider?id={}", app.base_url, slide_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_room_type_crud() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();
    login(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/admin/room-types", app.base_url))
        .json(&json!({"nameTR": "Deluxe", "nameEN": "Deluxe"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let id = body["data"]["id"].as_str().expect("room type id").to_string();

    // active toggle via partial update
    let res = c
        .put(format!("{}/api/admin/room-types/{}", app.base_url, id))
        .json(&json!({"active": false}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["active"], false);

    let res = c
        .delete(format!("{}/api/admin/room-types/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
