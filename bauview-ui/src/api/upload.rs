//! Local upload endpoints
//!
//! Local mode: a single JSON document (and optionally a plan image)
//! replaces the active view. A document that does not parse is a hard
//! 400 — it is the only input, so nothing is partially replaced.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::services::pipeline;
use crate::AppState;

/// Upload confirmation
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: String,
    pub matches: usize,
    pub components: usize,
}

/// POST /api/upload/matches
///
/// Body is one match document in the producer's JSON shape.
pub async fn upload_matches(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<UploadResponse>> {
    pipeline::apply_upload(&state, body.to_vec()).await?;

    let view = state.view.read().await;
    Ok(Json(UploadResponse {
        status: "ok".to_string(),
        matches: view.data.matches.len(),
        components: view.data.summary.len(),
    }))
}

/// Plan upload confirmation
#[derive(Debug, Serialize)]
pub struct PlanUploadResponse {
    pub status: String,
    pub width: u32,
    pub height: u32,
}

/// POST /api/upload/plan
///
/// Body is PNG or JPEG bytes for the reference plan.
pub async fn upload_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<PlanUploadResponse>> {
    let plan_image = pipeline::apply_plan_upload(&state, body.to_vec()).await?;

    Ok(Json(PlanUploadResponse {
        status: "ok".to_string(),
        width: plan_image.width,
        height: plan_image.height,
    }))
}
