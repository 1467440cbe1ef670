//! bauview-ui library - building-plan match dashboard
//!
//! Serves the normalized template-matching results over HTTP: a
//! per-component overview, the flat match sequence for the spatial view,
//! the reference plan image, and upload/refresh operations.

use axum::Router;
use bauview_common::config::Config;
use bauview_common::models::MatchData;
use bauview_common::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod services;

use services::{ComponentInfoTable, FetchCache, PlanImage};

const USER_AGENT: &str = "bauview/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Data currently shown by the dashboard
///
/// Replaced wholesale on upload or refresh; handlers only read.
#[derive(Debug, Clone, Default)]
pub struct ViewData {
    pub data: MatchData,
    pub info_table: ComponentInfoTable,
    pub plan_image: Option<Arc<PlanImage>>,
    /// Descriptor of the source the active dataset came from
    pub source: String,
    /// Present when the remote listing was unavailable; rendered by the
    /// UI as an empty-state message
    pub source_error: Option<String>,
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Client for side-table and plan-image fetches (document fetches use
    /// the record source's own client, which carries the credential)
    pub http_client: reqwest::Client,
    pub cache: Arc<FetchCache>,
    pub view: Arc<RwLock<ViewData>>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Internal(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
            cache: Arc::new(FetchCache::default()),
            view: Arc::new(RwLock::new(ViewData::default())),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::ui::serve_index))
        .route("/static/app.js", get(api::ui::serve_app_js))
        .route("/api/buildinfo", get(api::buildinfo::get_build_info))
        .route("/api/overview", get(api::overview::get_overview))
        .route("/api/matches", get(api::matches::get_matches))
        .route("/api/plan-image", get(api::plan::get_plan_image))
        .route("/api/upload/matches", post(api::upload::upload_matches))
        .route("/api/upload/plan", post(api::upload::upload_plan))
        .route("/api/refresh", post(api::refresh::refresh))
        .merge(api::health::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
