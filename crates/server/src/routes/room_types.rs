use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use common::types::ApiResponse;
use service::services::room_type_service::{self, RoomTypeInput, RoomTypePatch, RoomTypeView};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(get, path = "/api/admin/room-types", tag = "room-types",
    responses((status = 200, description = "All room types")))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<RoomTypeView>>>, ApiError> {
    let types = room_type_service::list(&state.db).await?;
    Ok(Json(ApiResponse::ok(types)))
}

#[utoipa::path(get, path = "/api/admin/room-types/{id}", tag = "room-types",
    responses((status = 200, description = "Room type"), (status = 404, description = "Not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RoomTypeView>>, ApiError> {
    let rt = room_type_service::get(&state.db, id).await?;
    Ok(Json(ApiResponse::ok(rt)))
}

#[utoipa::path(post, path = "/api/admin/room-types", tag = "room-types",
    responses((status = 200, description = "Created"), (status = 400, description = "Name required")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<RoomTypeInput>,
) -> Result<Json<ApiResponse<RoomTypeView>>, ApiError> {
    let rt = room_type_service::create(&state.db, input).await?;
    Ok(Json(ApiResponse::ok_with_message(rt, "room type created")))
}

#[utoipa::path(put, path = "/api/admin/room-types/{id}", tag = "room-types",
    responses((status = 200, description = "Updated"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<RoomTypePatch>,
) -> Result<Json<ApiResponse<RoomTypeView>>, ApiError> {
    let rt = room_type_service::update(&state.db, id, patch).await?;
    Ok(Json(ApiResponse::ok_with_message(rt, "room type updated")))
}

#[utoipa::path(delete, path = "/api/admin/room-types/{id}", tag = "room-types",
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    room_type_service::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::message_only("room type deleted")))
}
