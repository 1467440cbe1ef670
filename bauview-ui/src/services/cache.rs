//! Descriptor-keyed document cache
//!
//! Entries are keyed by the record-source descriptor and invalidated as a
//! whole; repository content only changes out of band, so value keys are
//! sufficient and no partial invalidation exists.

use bauview_common::models::RawDocument;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Whole-entry cache of fetched document batches
#[derive(Debug, Default)]
pub struct FetchCache {
    documents: RwLock<HashMap<String, Arc<Vec<RawDocument>>>>,
}

impl FetchCache {
    pub async fn get(&self, descriptor: &str) -> Option<Arc<Vec<RawDocument>>> {
        self.documents.read().await.get(descriptor).cloned()
    }

    pub async fn put(
        &self,
        descriptor: String,
        documents: Vec<RawDocument>,
    ) -> Arc<Vec<RawDocument>> {
        let documents = Arc::new(documents);
        self.documents
            .write()
            .await
            .insert(descriptor, Arc::clone(&documents));
        documents
    }

    /// Drop one entry; the next render cycle refetches it
    pub async fn invalidate(&self, descriptor: &str) {
        if self.documents.write().await.remove(descriptor).is_some() {
            tracing::debug!(descriptor = %descriptor, "Invalidated cached documents");
        }
    }
}
