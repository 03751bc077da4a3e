use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::auth::AdminAuthService;
use service::id_map::RoomIdMap;
use service::storage::ObjectStore;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: load config, connect and migrate, then serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;

    let db = models::db::connect().await?;
    Migrator::up(&db, None).await?;
    info!("database migrated");

    let auth = Arc::new(AdminAuthService::from_plain(
        &cfg.admin.username,
        &cfg.admin.password,
        &cfg.auth.jwt_secret,
        cfg.auth.token_ttl_hours,
    )?);

    let store = if cfg.storage.is_configured() {
        Some(Arc::new(ObjectStore::from_config(&cfg.storage).await?))
    } else {
        warn!("object storage not configured; uploads will fail");
        None
    };

    let id_map = Arc::new(RoomIdMap::new());
    match id_map.refresh(&db).await {
        Ok(entries) => info!(entries, "room id map primed"),
        Err(e) => warn!(err = %e, "room id map refresh failed; legacy slugs fall back to db lookups"),
    }

    let state = ServerState { db, auth, store, id_map };
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting hotel api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
