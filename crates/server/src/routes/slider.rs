use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use common::types::ApiResponse;
use service::services::slider_service::{self, SliderInput, SliderPatch, SliderView};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(get, path = "/api/slider", tag = "slider",
    responses((status = 200, description = "Active slides in display order")))]
pub async fn public_list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<SliderView>>>, ApiError> {
    let slides = slider_service::list_active(&state.db).await?;
    Ok(Json(ApiResponse::ok(slides)))
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<Uuid>,
}

/// Admin GET: all slides, or one when `?id=` is given.
#[utoipa::path(get, path = "/api/admin/slider", tag = "slider",
    responses((status = 200, description = "Slides"), (status = 404, description = "Unknown id")))]
pub async fn admin_get(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let data = match q.id {
        Some(id) => serde_json::to_value(slider_service::get(&state.db, id).await?),
        None => serde_json::to_value(slider_service::list_all(&state.db).await?),
    }
    .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(ApiResponse::ok(data)))
}

#[utoipa::path(post, path = "/api/admin/slider", tag = "slider",
    responses((status = 200, description = "Created"),
              (status = 400, description = "Missing title or image")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<SliderInput>,
) -> Result<Json<ApiResponse<SliderView>>, ApiError> {
    let slide = slider_service::create(&state.db, input).await?;
    Ok(Json(ApiResponse::ok_with_message(slide, "slide created")))
}

/// PUT carries the target id in the body, matching the admin UI.
#[utoipa::path(put, path = "/api/admin/slider", tag = "slider",
    responses((status = 200, description = "Updated"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<SliderPatch>,
) -> Result<Json<ApiResponse<SliderView>>, ApiError> {
    let id = patch
        .id
        .ok_or_else(|| ApiError::BadRequest("slide id required".into()))?;
    let slide = slider_service::update(&state.db, id, patch).await?;
    Ok(Json(ApiResponse::ok_with_message(slide, "slide updated")))
}

#[utoipa::path(delete, path = "/api/admin/slider", tag = "slider",
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = q
        .id
        .ok_or_else(|| ApiError::BadRequest("slide id required".into()))?;
    slider_service::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::message_only("slide deleted")))
}
