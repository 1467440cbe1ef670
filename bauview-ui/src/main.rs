//! bauview-ui - Building-plan match dashboard
//!
//! Displays previously computed template-matching results (detected
//! building-plan symbols) overlaid on a floor-plan image. Loads match
//! documents from the configured results repository at startup; uploads
//! and refreshes replace the active view at runtime.

use anyhow::Result;
use bauview_common::config::Config;
use bauview_ui::services::pipeline;
use bauview_ui::{build_router, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting bauview dashboard (bauview-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::load()?;
    info!(
        repo = %config.repo,
        folder = %config.folder,
        branch = %config.branch,
        authenticated = config.token.is_some(),
        "Match source configured"
    );

    let port = config.port;
    let state = AppState::new(config)?;

    // Initial load; an unreachable source renders as an empty state, it
    // must not keep the dashboard from starting
    if let Err(e) = pipeline::refresh_from_remote(&state, false).await {
        warn!("Initial load failed: {}", e);
    } else {
        info!("✓ Initial view loaded");
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("bauview-ui listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
