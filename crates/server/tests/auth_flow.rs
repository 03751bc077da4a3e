use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::json;
use tower::Service;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::auth::AdminAuthService;
use service::id_map::RoomIdMap;

const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "TestPass123!";

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        let msg = format!("{}", e);
        if msg.contains("duplicate key value violates unique constraint") {
            eprintln!("migrations already applied, continue: {}", msg);
        } else {
            return Err(e.into());
        }
    }
    let auth = Arc::new(AdminAuthService::from_plain(
        ADMIN_USER,
        ADMIN_PASS,
        "test-secret",
        8,
    )?);
    let id_map = Arc::new(RoomIdMap::new());
    let state = ServerState { db, auth, store: None, id_map };
    Ok(routes::build_router(state, CorsLayer::very_permissive()))
}

fn login_body(username: &str, password: &str) -> Body {
    Body::from(
        serde_json::to_vec(&json!({"username": username, "password": password})).unwrap(),
    )
}

async fn login_cookie(app: &mut Router) -> anyhow::Result<String> {
    let req = Request::builder()
        .method("POST")
        .uri("/api/admin/auth")
        .header("content-type", "application/json")
        .body(login_body(ADMIN_USER, ADMIN_PASS))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header");
    // "auth_token=...; Path=/; ..." -> "auth_token=..."
    Ok(set_cookie.split(';').next().unwrap_or_default().to_string())
}

#[tokio::test]
async fn login_sets_cookie_and_opens_admin_routes() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let mut app = match build_app().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: cannot build app: {}", e);
            return Ok(());
        }
    };

    // admin route denied without a cookie
    let req = Request::builder()
        .uri("/api/admin/room-types")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let cookie = login_cookie(&mut app).await?;
    assert!(cookie.starts_with("auth_token="));

    // same route passes with the cookie
    let req = Request::builder()
        .uri("/api/admin/room-types")
        .header("cookie", &cookie)
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn room_reads_open_room_writes_guarded() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let mut app = match build_app().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: cannot build app: {}", e);
            return Ok(());
        }
    };

    let req = Request::builder().uri("/api/rooms").body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("POST")
        .uri("/api/rooms")
        .header("content-type", "application/json")
        .body(Body::from("{}"))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let mut app = match build_app().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: cannot build app: {}", e);
            return Ok(());
        }
    };

    let req = Request::builder()
        .method("POST")
        .uri("/api/admin/auth")
        .header("content-type", "application/json")
        .body(login_body(ADMIN_USER, "wrong"))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // empty fields -> 400
    let req = Request::builder()
        .method("POST")
        .uri("/api/admin/auth")
        .header("content-type", "application/json")
        .body(login_body("", ""))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // missing fields get the same 400, not an extractor rejection
    for body in ["{}", r#"{"username":"admin"}"#] {
        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/auth")
            .header("content-type", "application/json")
            .body(Body::from(body))?;
        let resp = app.call(req).await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {}", body);
    }
    Ok(())
}

#[tokio::test]
async fn public_routes_skip_the_guard() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let mut app = match build_app().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: cannot build app: {}", e);
            return Ok(());
        }
    };

    for uri in ["/health", "/api/public-rooms", "/api/slider", "/api/services"] {
        let req = Request::builder().uri(uri).body(Body::empty())?;
        let resp = app.call(req).await?;
        assert_eq!(resp.status(), StatusCode::OK, "{} should be public", uri);
    }
    Ok(())
}

#[tokio::test]
async fn asset_like_room_ids_rejected() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let mut app = match build_app().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: cannot build app: {}", e);
            return Ok(());
        }
    };

    let req = Request::builder()
        .uri("/api/public-rooms/standard.jpg")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn logout_removes_cookie() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let mut app = match build_app().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: cannot build app: {}", e);
            return Ok(());
        }
    };

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/admin/auth")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header");
    assert!(set_cookie.contains("auth_token="));
    assert!(set_cookie.to_lowercase().contains("max-age=0") || set_cookie.contains("Expires"));
    Ok(())
}
