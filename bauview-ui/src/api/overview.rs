//! Component overview endpoint
//!
//! Backs the expandable per-component list: one row per summary entry,
//! joined with its side-table metadata and its matches.

use axum::{extract::State, Json};
use bauview_common::models::{ComponentInfo, SymbolMatch};
use serde::Serialize;

use crate::AppState;

/// Overview response
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    /// Descriptor of the active source
    pub source: String,
    /// Present when the remote listing was unavailable; the UI renders an
    /// empty-state message from it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_error: Option<String>,
    pub total_matches: usize,
    pub components: Vec<ComponentOverview>,
}

/// One expandable row
#[derive(Debug, Serialize)]
pub struct ComponentOverview {
    pub label: String,
    pub count: u64,
    pub info: ComponentInfo,
    pub matches: Vec<SymbolMatch>,
}

/// GET /api/overview
pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let view = state.view.read().await;

    let components = view
        .data
        .summary
        .entries()
        .iter()
        .map(|entry| {
            // Summary labels are component types normally, verbatim
            // template names when the producer supplied its own aggregate;
            // match rows against either
            let matches: Vec<SymbolMatch> = view
                .data
                .matches
                .iter()
                .filter(|symbol_match| {
                    symbol_match.component_type == entry.label
                        || symbol_match.template == entry.label
                })
                .cloned()
                .collect();

            ComponentOverview {
                label: entry.label.clone(),
                count: entry.count,
                info: view.info_table.get(&entry.label),
                matches,
            }
        })
        .collect();

    Json(OverviewResponse {
        source: view.source.clone(),
        source_error: view.source_error.clone(),
        total_matches: view.data.matches.len(),
        components,
    })
}
