use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline;

pub const ACK_MESSAGE: &str = "Story stake received. Marvin is writing your entry.";

pub async fn submit(State(state): State<SharedState>, body: Bytes) -> Result<Json<Value>, AppError> {
    let result = pipeline::run(&state, &body).await?;

    Ok(Json(json!({
        "success": true,
        "message": ACK_MESSAGE,
        "id": result.id,
    })))
}
