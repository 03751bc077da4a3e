use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use common::types::ApiResponse;
use service::services::room_service::{self, RoomGalleryView, RoomInput, RoomPatch, RoomView};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(get, path = "/api/rooms", tag = "rooms",
    responses((status = 200, description = "All rooms, inactive included")))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<RoomView>>>, ApiError> {
    let rooms = room_service::list(&state.db, true).await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

#[utoipa::path(get, path = "/api/rooms/{id}", tag = "rooms",
    responses((status = 200, description = "Room"), (status = 404, description = "Not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RoomView>>, ApiError> {
    let room = room_service::get(&state.db, id).await?;
    Ok(Json(ApiResponse::ok(room)))
}

#[utoipa::path(post, path = "/api/rooms", tag = "rooms",
    responses((status = 200, description = "Created"), (status = 400, description = "Validation")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<RoomInput>,
) -> Result<Json<ApiResponse<RoomView>>, ApiError> {
    let room = room_service::create(&state.db, input).await?;
    state.id_map.refresh(&state.db).await?;
    Ok(Json(ApiResponse::ok_with_message(room, "room created")))
}

#[utoipa::path(put, path = "/api/rooms/{id}", tag = "rooms",
    responses((status = 200, description = "Updated"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<RoomPatch>,
) -> Result<Json<ApiResponse<RoomView>>, ApiError> {
    let room = room_service::update(&state.db, id, patch).await?;
    state.id_map.refresh(&state.db).await?;
    Ok(Json(ApiResponse::ok_with_message(room, "room updated")))
}

#[utoipa::path(delete, path = "/api/rooms/{id}", tag = "rooms",
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    room_service::delete(&state.db, id).await?;
    state.id_map.refresh(&state.db).await?;
    Ok(Json(ApiResponse::message_only("room deleted")))
}

#[derive(Debug, Deserialize)]
pub struct GalleryReplaceInput {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "mainImageUrl", alias = "image")]
    pub main_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GalleryImageInput {
    #[serde(rename = "imageUrl", alias = "image", default)]
    pub image_url: String,
}

#[utoipa::path(get, path = "/api/rooms/gallery/{id}", tag = "rooms",
    responses((status = 200, description = "Main image and ordered gallery URLs")))]
pub async fn gallery_get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RoomGalleryView>>, ApiError> {
    let view = room_service::gallery_get(&state.db, id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

#[utoipa::path(put, path = "/api/rooms/gallery/{id}", tag = "rooms",
    responses((status = 200, description = "Gallery replaced")))]
pub async fn gallery_replace(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GalleryReplaceInput>,
) -> Result<Json<ApiResponse<RoomGalleryView>>, ApiError> {
    let view =
        room_service::gallery_replace(&state.db, id, input.images, input.main_image_url).await?;
    Ok(Json(ApiResponse::ok_with_message(view, "gallery updated")))
}

#[utoipa::path(post, path = "/api/rooms/gallery/{id}", tag = "rooms",
    responses((status = 200, description = "Image appended"),
              (status = 400, description = "Duplicate or empty URL")))]
pub async fn gallery_add(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GalleryImageInput>,
) -> Result<Json<ApiResponse<RoomGalleryView>>, ApiError> {
    let view = room_service::gallery_add(&state.db, id, &input.image_url).await?;
    Ok(Json(ApiResponse::ok_with_message(view, "image added")))
}

#[utoipa::path(delete, path = "/api/rooms/gallery/{id}", tag = "rooms",
    responses((status = 200, description = "Image removed"),
              (status = 404, description = "Image not in gallery")))]
pub async fn gallery_remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GalleryImageInput>,
) -> Result<Json<ApiResponse<RoomGalleryView>>, ApiError> {
    let view = room_service::gallery_remove(&state.db, id, &input.image_url).await?;
    Ok(Json(ApiResponse::ok_with_message(view, "image removed")))
}
