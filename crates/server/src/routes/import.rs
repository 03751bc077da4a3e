use axum::extract::State;
use axum::Json;

use common::types::ApiResponse;
use service::services::room_service::{self, RoomInput, RoomView};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// Seed/import: replaces all rooms and galleries with the posted records.
#[utoipa::path(post, path = "/api/admin/import-rooms", tag = "rooms",
    responses((status = 200, description = "Rooms replaced with the posted set"),
              (status = 400, description = "A record is missing a name")))]
pub async fn import_rooms(
    State(state): State<ServerState>,
    Json(records): Json<Vec<RoomInput>>,
) -> Result<Json<ApiResponse<Vec<RoomView>>>, ApiError> {
    if records.is_empty() {
        return Err(ApiError::BadRequest("at least one room record required".into()));
    }
    let rooms = room_service::import(&state.db, records).await?;
    state.id_map.refresh(&state.db).await?;
    Ok(Json(ApiResponse::ok_with_message(rooms, "rooms imported")))
}
