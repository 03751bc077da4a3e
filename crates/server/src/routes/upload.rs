use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use common::types::ApiResponse;
use service::storage::{media, ObjectStore};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

struct UploadPart {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Pull the `file` part plus one optional text field out of the multipart
/// body. Extra parts are ignored.
async fn read_multipart(
    mut multipart: Multipart,
    text_field: &str,
) -> Result<(UploadPart, Option<String>), ApiError> {
    let mut file: Option<UploadPart> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read file: {}", e)))?
                    .to_vec();
                file = Some(UploadPart { filename, content_type, bytes });
            }
            Some(name) if name == text_field => {
                text = field.text().await.ok();
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("file field required".into()))?;
    Ok((file, text))
}

fn store_of(state: &ServerState) -> Result<&ObjectStore, ApiError> {
    state
        .store
        .as_deref()
        .ok_or_else(|| ApiError::Internal("object storage is not configured".into()))
}

/// Room image upload. `room_id` selects the folder; missing or invalid ids
/// land in `rooms/default`.
#[utoipa::path(post, path = "/api/upload", tag = "upload",
    responses((status = 200, description = "Public URL of the stored image"),
              (status = 400, description = "Wrong type or too large")))]
pub async fn room_image(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let store = store_of(&state)?;
    let (file, room_id) = read_multipart(multipart, "room_id").await?;

    let kind = media::classify(&file.content_type, false)?;
    media::check_size(kind, file.bytes.len())?;

    let folder = room_id
        .as_deref()
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .map(|id| id.to_string())
        .unwrap_or_else(|| "default".to_string());
    let key = media::object_key(&format!("rooms/{}", folder), &file.filename, &file.content_type);
    let url = store.put(&key, &file.content_type, file.bytes).await?;

    Ok(Json(ApiResponse::ok(json!({ "url": url }))))
}

/// Slider upload: images or videos, videos with the larger size cap.
#[utoipa::path(post, path = "/api/admin/slider/upload", tag = "upload",
    responses((status = 200, description = "Public URL and media kind"),
              (status = 400, description = "Wrong type or too large")))]
pub async fn slider_media(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let store = store_of(&state)?;
    let (file, folder) = read_multipart(multipart, "folder").await?;

    let kind = media::classify(&file.content_type, true)?;
    media::check_size(kind, file.bytes.len())?;

    let folder = media::sanitize_folder(folder.as_deref().unwrap_or(""));
    let key = media::object_key(&format!("slider/{}", folder), &file.filename, &file.content_type);
    let url = store.put(&key, &file.content_type, file.bytes).await?;

    Ok(Json(ApiResponse::ok(json!({
        "url": url,
        "type": kind.as_str(),
    }))))
}
