use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    MissingFields,
    StorageUnavailable(String),
    NotFound,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
            AppError::MissingFields => write!(f, "project and story required"),
            AppError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidRequest(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request", "details": details }),
            ),
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "project and story required" }),
            ),
            AppError::StorageUnavailable(details) => {
                tracing::error!("Storage error: {details}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Storage unavailable", "details": details }),
                )
            }
            AppError::NotFound => {
                return (StatusCode::NOT_FOUND, "Not found").into_response();
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}
