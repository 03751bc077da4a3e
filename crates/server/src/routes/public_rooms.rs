use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use common::types::ApiResponse;
use service::id_map;
use service::services::room_service::{self, RoomView};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default, alias = "includeInactive")]
    pub include_inactive: Option<String>,
    /// Accepted for older clients; rows carry both languages.
    #[serde(default)]
    pub lang: Option<String>,
}

#[utoipa::path(get, path = "/api/public-rooms", tag = "public",
    responses((status = 200, description = "Rooms with galleries")))]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<RoomView>>>, ApiError> {
    let include_inactive = q.include_inactive.as_deref() == Some("true");
    let rooms = room_service::list(&state.db, include_inactive).await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

#[utoipa::path(get, path = "/api/public-rooms/{id}", tag = "public",
    responses((status = 200, description = "Room with gallery"),
              (status = 400, description = "Asset-like id"),
              (status = 404, description = "No room resolves")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RoomView>>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("room id required".into()));
    }
    if id_map::is_asset_path(&id) {
        return Err(ApiError::BadRequest("invalid room id".into()));
    }
    let resolved = state
        .id_map
        .resolve(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("room not found".into()))?;
    let room = room_service::get(&state.db, resolved).await?;
    Ok(Json(ApiResponse::ok(room)))
}
