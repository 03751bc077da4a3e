use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use common::types::ApiResponse;
use service::services::service_service::{self, ServiceGalleryImage, ServiceView};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(get, path = "/api/services", tag = "services",
    responses((status = 200, description = "Active services with galleries")))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<ServiceView>>>, ApiError> {
    let services = service_service::list_active(&state.db).await?;
    Ok(Json(ApiResponse::ok(services)))
}

#[utoipa::path(get, path = "/api/services/{id}", tag = "services",
    responses((status = 200, description = "Service with gallery"),
              (status = 404, description = "Not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ServiceView>>, ApiError> {
    let svc = service_service::get(&state.db, id).await?;
    Ok(Json(ApiResponse::ok(svc)))
}

#[utoipa::path(get, path = "/api/admin/services/{id}/gallery", tag = "services",
    responses((status = 200, description = "Gallery rows with ids")))]
pub async fn gallery_list(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ServiceGalleryImage>>>, ApiError> {
    let rows = service_service::gallery_list(&state.db, id).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

#[derive(Debug, Deserialize)]
pub struct GalleryImageInput {
    #[serde(rename = "imageUrl", alias = "image", default)]
    pub image_url: String,
}

#[utoipa::path(post, path = "/api/admin/services/{id}/gallery", tag = "services",
    responses((status = 200, description = "Image appended")))]
pub async fn gallery_add(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GalleryImageInput>,
) -> Result<Json<ApiResponse<ServiceGalleryImage>>, ApiError> {
    let row = service_service::gallery_add(&state.db, id, &input.image_url).await?;
    Ok(Json(ApiResponse::ok_with_message(row, "image added")))
}

#[derive(Debug, Deserialize)]
pub struct GalleryDeleteQuery {
    pub image_id: Option<Uuid>,
}

#[utoipa::path(delete, path = "/api/admin/services/{id}/gallery", tag = "services",
    responses((status = 200, description = "Image removed and gallery renumbered")))]
pub async fn gallery_remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Query(q): Query<GalleryDeleteQuery>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let image_id = q
        .image_id
        .ok_or_else(|| ApiError::BadRequest("image_id required".into()))?;
    service_service::gallery_remove(&state.db, id, image_id).await?;
    Ok(Json(ApiResponse::message_only("image removed")))
}

#[derive(Debug, Deserialize)]
pub struct GalleryReplaceInput {
    #[serde(default)]
    pub images: Vec<String>,
}

#[utoipa::path(put, path = "/api/admin/services/{id}/gallery", tag = "services",
    responses((status = 200, description = "Gallery replaced, main image updated"),
              (status = 400, description = "No valid image URLs")))]
pub async fn gallery_replace(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GalleryReplaceInput>,
) -> Result<Json<ApiResponse<ServiceView>>, ApiError> {
    let svc = service_service::gallery_replace(&state.db, id, input.images).await?;
    Ok(Json(ApiResponse::ok_with_message(svc, "gallery updated")))
}
