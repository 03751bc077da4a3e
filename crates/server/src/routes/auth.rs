use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde_json::json;

use service::auth::domain::LoginInput;
use service::auth::AdminAuthService;
use service::id_map::RoomIdMap;
use service::storage::ObjectStore;

use crate::errors::ApiError;
use common::types::ApiResponse;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AdminAuthService>,
    /// None when object storage is not configured; uploads then return 500.
    pub store: Option<Arc<ObjectStore>>,
    pub id_map: Arc<RoomIdMap>,
}

#[utoipa::path(post, path = "/api/admin/auth", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses((status = 200, description = "Logged in, cookie set"),
              (status = 400, description = "Missing fields"),
              (status = 401, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<ApiResponse<serde_json::Value>>), ApiError> {
    if input.username.trim().is_empty() || input.password.is_empty() {
        return Err(ApiError::BadRequest("username and password required".into()));
    }
    let session = state.auth.login(&input)?;

    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_max_age(time::Duration::seconds(session.max_age_secs));
    let jar = jar.add(cookie);

    Ok((
        jar,
        Json(ApiResponse::ok_with_message(
            json!({ "username": session.username }),
            "login successful",
        )),
    ))
}

#[utoipa::path(delete, path = "/api/admin/auth", tag = "auth",
    responses((status = 200, description = "Logged out, cookie removed")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    let mut removal = Cookie::from(AUTH_COOKIE);
    removal.set_path("/");
    let jar = jar.remove(removal);
    (jar, Json(ApiResponse::message_only("logged out")))
}

/// Paths that skip the admin guard: health, docs, the login/logout endpoint,
/// CORS preflight, the public site API and read-only room lookups. Mutating
/// room routes and everything under `/api/admin` (auth aside) stay guarded.
fn is_whitelisted(path: &str, method: &Method) -> bool {
    if *method == Method::OPTIONS {
        return true;
    }
    if path == "/health" || path.starts_with("/docs") || path.starts_with("/api-docs") {
        return true;
    }
    if path == "/api/admin/auth" {
        return true;
    }
    if *method == Method::GET {
        return path == "/api/public-rooms"
            || path.starts_with("/api/public-rooms/")
            || path == "/api/services"
            || path.starts_with("/api/services/")
            || path == "/api/slider"
            || path == "/api/rooms"
            || path.starts_with("/api/rooms/");
    }
    false
}

/// Admin guard. Everything outside the whitelist needs a valid `auth_token`
/// cookie (or Bearer header) carrying an admin token.
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    if is_whitelisted(&path, req.method()) {
        return Ok(next.run(req).await);
    }

    let token = {
        let from_cookie = req
            .headers()
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|header| {
                header.split(';').find_map(|part| {
                    part.trim()
                        .strip_prefix("auth_token=")
                        .map(|t| t.to_string())
                })
            });
        match from_cookie {
            Some(t) if !t.is_empty() => t,
            _ => {
                let bearer = req
                    .headers()
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|h| h.strip_prefix("Bearer "))
                    .map(|t| t.to_string());
                match bearer {
                    Some(t) if !t.is_empty() => t,
                    _ => {
                        tracing::warn!(path = %path, "missing auth_token cookie");
                        return Err(ApiError::Unauthorized("authentication required".into()));
                    }
                }
            }
        }
    };

    match state.auth.verify_token(&token) {
        Ok(_claims) => Ok(next.run(req).await),
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(ApiError::Unauthorized("invalid or expired token".into()))
        }
    }
}
