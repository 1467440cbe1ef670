//! Cache refresh endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::services::pipeline;
use crate::AppState;

/// Refresh confirmation
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: String,
    pub source: String,
    pub matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_error: Option<String>,
}

/// POST /api/refresh
///
/// Drops the cached documents for the configured remote source and
/// reloads. An unreachable source still answers 200 with an empty
/// dataset and a note, matching the empty-state contract.
pub async fn refresh(State(state): State<AppState>) -> ApiResult<Json<RefreshResponse>> {
    pipeline::refresh_from_remote(&state, true).await?;

    let view = state.view.read().await;
    Ok(Json(RefreshResponse {
        status: "reloaded".to_string(),
        source: view.source.clone(),
        matches: view.data.matches.len(),
        source_error: view.source_error.clone(),
    }))
}
