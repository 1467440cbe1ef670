//! Render-cycle assembly
//!
//! One cycle is source → cache → normalizer → view state. The remote
//! listing being unavailable degrades to an empty dataset with a note for
//! the UI; only an unparseable upload is a hard error.

use bauview_common::Result;
use std::sync::Arc;

use crate::services::component_info::ComponentInfoTable;
use crate::services::github_source::GithubSource;
use crate::services::normalizer::normalize;
use crate::services::plan_image::PlanImage;
use crate::services::source::{RecordSource, UploadSource};
use crate::AppState;

/// Reload the view from the configured results repository
pub async fn refresh_from_remote(state: &AppState, invalidate: bool) -> Result<()> {
    let source = GithubSource::from_config(&state.config)?;
    load_from_source(state, &source, invalidate).await
}

/// Reload the view from any record source, going through the cache
pub async fn load_from_source<S: RecordSource>(
    state: &AppState,
    source: &S,
    invalidate: bool,
) -> Result<()> {
    let descriptor = source.descriptor();

    if invalidate {
        state.cache.invalidate(&descriptor).await;
    }

    let (documents, source_error) = match state.cache.get(&descriptor).await {
        Some(documents) => {
            tracing::debug!(descriptor = %descriptor, "Using cached documents");
            (documents, None)
        }
        None => match source.fetch_documents().await {
            Ok(documents) => (state.cache.put(descriptor.clone(), documents).await, None),
            Err(e) => {
                // An unreachable listing is "no data", not a crash
                tracing::warn!(error = %e, "Match source unavailable, rendering empty state");
                (Arc::new(Vec::new()), Some(e.to_string()))
            }
        },
    };

    let data = normalize(&documents);
    let info_table =
        ComponentInfoTable::fetch(&state.http_client, &state.config.side_table_url).await;

    let plan_image =
        match PlanImage::fetch(&state.http_client, &state.config.plan_image_url).await {
            Ok(plan_image) => Some(Arc::new(plan_image)),
            Err(e) => {
                tracing::warn!(error = %e, "Plan image unavailable");
                None
            }
        };

    tracing::info!(
        descriptor = %descriptor,
        matches = data.matches.len(),
        components = data.summary.len(),
        "View refreshed"
    );

    let mut view = state.view.write().await;
    view.data = data;
    view.info_table = info_table;
    view.plan_image = plan_image;
    view.source = descriptor;
    view.source_error = source_error;
    Ok(())
}

/// Replace the active dataset with one uploaded document
///
/// Parse failure propagates: the upload is the only input in local mode,
/// and no partial replacement happens on error. The side table and plan
/// image are independent of the match source and keep their last state.
pub async fn apply_upload(state: &AppState, buffer: Vec<u8>) -> Result<()> {
    let source = UploadSource::new(buffer);
    let documents = source.fetch_documents().await?;
    let data = normalize(&documents);

    tracing::info!(
        matches = data.matches.len(),
        components = data.summary.len(),
        "Applied uploaded match document"
    );

    let mut view = state.view.write().await;
    view.data = data;
    view.source = source.descriptor();
    view.source_error = None;
    Ok(())
}

/// Replace the active plan image with uploaded bytes
pub async fn apply_plan_upload(state: &AppState, bytes: Vec<u8>) -> Result<Arc<PlanImage>> {
    let plan_image = Arc::new(PlanImage::decode(bytes)?);
    tracing::info!(
        width = plan_image.width,
        height = plan_image.height,
        "Applied uploaded plan image"
    );
    state.view.write().await.plan_image = Some(Arc::clone(&plan_image));
    Ok(plan_image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bauview_common::config::Config;
    use bauview_common::models::RawDocument;
    use bauview_common::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Aux fetches (side table, plan image) hit a closed local port and
    /// degrade as they would against an unreachable host
    fn offline_state() -> AppState {
        let mut config = Config::default();
        config.side_table_url = "http://127.0.0.1:9/side-table.json".to_string();
        config.plan_image_url = "http://127.0.0.1:9/plan.png".to_string();
        AppState::new(config).unwrap()
    }

    struct FakeSource {
        fetches: AtomicUsize,
        fail: bool,
    }

    impl FakeSource {
        fn new(fail: bool) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl RecordSource for FakeSource {
        fn descriptor(&self) -> String {
            "fake".to_string()
        }

        async fn fetch_documents(&self) -> bauview_common::Result<Vec<RawDocument>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::SourceUnavailable("listing unreachable".to_string()));
            }
            Ok(vec![serde_json::from_str(
                r#"{"component_type": "Valve", "matches": [{"template": "v1"}]}"#,
            )
            .unwrap()])
        }
    }

    #[tokio::test]
    async fn test_load_populates_view() {
        let state = offline_state();
        let source = FakeSource::new(false);

        load_from_source(&state, &source, false).await.unwrap();

        let view = state.view.read().await;
        assert_eq!(view.data.matches.len(), 1);
        assert_eq!(view.data.summary.get("Valve"), Some(1));
        assert_eq!(view.source, "fake");
        assert!(view.source_error.is_none());
        // Side table was unreachable: metadata degrades to empty, no error
        assert!(view.info_table.is_empty());
        assert!(view.plan_image.is_none());
    }

    #[tokio::test]
    async fn test_second_load_uses_cache() {
        let state = offline_state();
        let source = FakeSource::new(false);

        load_from_source(&state, &source, false).await.unwrap();
        load_from_source(&state, &source, false).await.unwrap();

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let state = offline_state();
        let source = FakeSource::new(false);

        load_from_source(&state, &source, false).await.unwrap();
        load_from_source(&state, &source, true).await.unwrap();

        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unavailable_source_renders_empty_state() {
        let state = offline_state();
        let source = FakeSource::new(true);

        load_from_source(&state, &source, false).await.unwrap();

        let view = state.view.read().await;
        assert!(view.data.matches.is_empty());
        assert!(view.data.summary.is_empty());
        assert!(view.source_error.is_some());
    }

    #[tokio::test]
    async fn test_upload_replaces_dataset_only_on_success() {
        let state = offline_state();

        apply_upload(
            &state,
            br#"{"component_type": "Valve", "matches": [{"template": "v1"}]}"#.to_vec(),
        )
        .await
        .unwrap();

        let result = apply_upload(&state, b"{not json".to_vec()).await;
        assert!(matches!(result, Err(Error::DocumentParse { .. })));

        let view = state.view.read().await;
        assert_eq!(view.data.summary.get("Valve"), Some(1));
        assert_eq!(view.source, "upload");
    }
}
