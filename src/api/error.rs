use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mission_sync_core::SyncError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Body could not be read as the endpoint's payload
    #[error("{0}")]
    BadRequest(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Sync(SyncError::InvalidRequest { message }) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Sync(err @ SyncError::Conflict { .. }) => (
                StatusCode::CONFLICT,
                Json(json!({ "success": false, "error": err.to_string() })),
            )
                .into_response(),
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
