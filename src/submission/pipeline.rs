use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::store::StoreError;

use super::{fields, key, parser};

pub struct PipelineResult {
    pub id: String,
}

/// Validate, normalize and persist one submit body.
///
/// Input problems surface as `InvalidRequest` or `MissingFields`; a failed
/// write surfaces as `StorageUnavailable`.
pub async fn run(state: &SharedState, body: &[u8]) -> Result<PipelineResult, AppError> {
    let submission = accept(body)?;

    let now = chrono::Utc::now();
    let id = key::generate(now);

    let value = serde_json::to_value(&submission).map_err(StoreError::from)?;

    tracing::info!("Story stake received ({id}): {value}");

    state
        .store
        .put(&id, &value, state.config.retention())
        .await?;

    tracing::debug!("Stored {id} in {} store", state.store.backend());

    Ok(PipelineResult { id })
}

/// Parse and normalize a body without touching the store.
pub fn accept(body: &[u8]) -> Result<Submission, AppError> {
    let parsed = parser::parse_body(body).map_err(AppError::InvalidRequest)?;
    let raw = parser::extract_fields(&parsed).map_err(AppError::InvalidRequest)?;

    if !fields::has_required(&raw) {
        return Err(AppError::MissingFields);
    }

    fields::normalize(&raw, || key::timestamp(chrono::Utc::now())).map_err(AppError::InvalidRequest)
}
