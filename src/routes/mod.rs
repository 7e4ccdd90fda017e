pub mod health;
pub mod submit;

use axum::routing::{any, post};
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

pub fn intake_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/submit", post(submit::submit).fallback(not_found))
        .route("/api/health", any(health::health))
        .fallback(not_found)
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
