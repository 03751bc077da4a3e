use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod auth;
pub mod import;
pub mod public_rooms;
pub mod room_types;
pub mod rooms;
pub mod services;
pub mod slider;
pub mod upload;

pub use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public site API, admin API behind the
/// cookie guard, uploads and swagger docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/public-rooms", get(public_rooms::list))
        .route("/api/public-rooms/:id", get(public_rooms::get))
        .route("/api/services", get(services::list))
        .route("/api/services/:id", get(services::get))
        .route("/api/slider", get(slider::public_list));

    let admin = Router::new()
        .route("/api/admin/auth", post(auth::login).delete(auth::logout))
        .route("/api/rooms", get(rooms::list).post(rooms::create))
        .route(
            "/api/rooms/:id",
            get(rooms::get).put(rooms::update).delete(rooms::delete),
        )
        .route(
            "/api/rooms/gallery/:id",
            get(rooms::gallery_get)
                .put(rooms::gallery_replace)
                .post(rooms::gallery_add)
                .delete(rooms::gallery_remove),
        )
        .route(
            "/api/admin/slider",
            get(slider::admin_get)
                .post(slider::create)
                .put(slider::update)
                .delete(slider::delete),
        )
        .route("/api/admin/slider/upload", post(upload::slider_media))
        .route(
            "/api/admin/room-types",
            get(room_types::list).post(room_types::create),
        )
        .route(
            "/api/admin/room-types/:id",
            get(room_types::get)
                .put(room_types::update)
                .delete(room_types::delete),
        )
        .route(
            "/api/admin/services/:id/gallery",
            get(services::gallery_list)
                .post(services::gallery_add)
                .put(services::gallery_replace)
                .delete(services::gallery_remove),
        )
        .route("/api/admin/import-rooms", post(import::import_rooms))
        .route("/api/upload", post(upload::room_image))
        // multipart bodies up to the video cap plus form overhead
        .layer(DefaultBodyLimit::max(
            service::storage::MAX_VIDEO_BYTES + 1024 * 1024,
        ));

    public
        .merge(admin)
        .merge(SwaggerUi::new("/docs").url(
            "/api-docs/openapi.json",
            crate::openapi::ApiDoc::openapi(),
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
