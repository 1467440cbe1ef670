//! Reference plan image endpoint

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/plan-image
///
/// Serves the active plan image bytes unchanged. 404 until a plan has
/// been fetched or uploaded; the rest of the dashboard works without one.
pub async fn get_plan_image(State(state): State<AppState>) -> ApiResult<Response> {
    let view = state.view.read().await;

    let plan_image = view
        .plan_image
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no plan image loaded".to_string()))?;

    Ok((
        [("content-type", plan_image.content_type)],
        plan_image.bytes.clone(),
    )
        .into_response())
}
