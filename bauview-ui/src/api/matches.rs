//! Flat match listing endpoint
//!
//! Backs the spatial view and the full tabular listing. Every match is
//! returned; non-plottable ones are flagged so the spatial view can skip
//! them while the table still shows them.

use axum::{extract::State, Json};
use bauview_common::models::{BoundingBox, Position, SymbolMatch};
use serde::Serialize;

use crate::AppState;

/// Match listing response
#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub total: usize,
    pub plottable: usize,
    /// Pixel dimensions of the reference plan, when one is loaded; the
    /// spatial view sizes its canvas from this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanDimensions>,
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Serialize)]
pub struct PlanDimensions {
    pub width: u32,
    pub height: u32,
}

/// One match as the UI consumes it
#[derive(Debug, Serialize)]
pub struct MatchView {
    pub template: String,
    pub component_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    pub plottable: bool,
    /// Where the spatial view draws this match, in plan pixels
    /// (y grows downward, image convention)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_point: Option<Position>,
}

impl From<&SymbolMatch> for MatchView {
    fn from(symbol_match: &SymbolMatch) -> Self {
        Self {
            template: symbol_match.template.clone(),
            component_type: symbol_match.component_type.clone(),
            position: symbol_match.position,
            bounding_box: symbol_match.bounding_box,
            plottable: symbol_match.is_plottable(),
            plot_point: symbol_match.plot_point(),
        }
    }
}

/// GET /api/matches
pub async fn get_matches(State(state): State<AppState>) -> Json<MatchesResponse> {
    let view = state.view.read().await;

    let matches: Vec<MatchView> = view.data.matches.iter().map(MatchView::from).collect();
    let plottable = matches.iter().filter(|m| m.plottable).count();

    Json(MatchesResponse {
        total: matches.len(),
        plottable,
        plan: view.plan_image.as_ref().map(|plan_image| PlanDimensions {
            width: plan_image.width,
            height: plan_image.height,
        }),
        matches,
    })
}
