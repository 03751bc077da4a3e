use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use common::types::ApiResponse;
use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// Route-level error. Every variant renders the `{success:false, message}`
/// envelope with its status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %msg, "internal error");
        }
        (status, Json(ApiResponse::<()>::fail(msg))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) => ApiError::BadRequest(m),
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            ServiceError::Db(m) | ServiceError::Storage(m) => ApiError::Internal(m),
            ServiceError::Model(me) => match me {
                models::errors::ModelError::Validation(m) => ApiError::BadRequest(m),
                models::errors::ModelError::Db(m) => ApiError::Internal(m),
            },
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        tracing::warn!(code = e.code(), error = %e, "auth error");
        match e {
            AuthError::Validation(m) => ApiError::BadRequest(m),
            // same message for unknown user and wrong password
            AuthError::Unauthorized => ApiError::Unauthorized("invalid credentials".into()),
            AuthError::HashError(m) | AuthError::TokenError(m) => ApiError::Internal(m),
        }
    }
}
