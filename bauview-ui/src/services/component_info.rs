//! Component info side table
//!
//! Maps a component-type name to descriptive metadata (price, dimensions,
//! alternatives, notes). The table is cosmetic: a missing or malformed
//! side table degrades to an empty one, lookups for unknown types return
//! the placeholder, and no failure here ever reaches the main pipeline.

use bauview_common::models::ComponentInfo;
use bauview_common::{Error, Result};
use std::collections::HashMap;

/// In-memory side table with infallible lookup
#[derive(Debug, Clone, Default)]
pub struct ComponentInfoTable {
    entries: HashMap<String, ComponentInfo>,
}

impl ComponentInfoTable {
    pub fn new(entries: HashMap<String, ComponentInfo>) -> Self {
        Self { entries }
    }

    /// Fetch and parse the side table. Every failure path yields the
    /// empty table; the dashboard stays up without metadata.
    pub async fn fetch(http_client: &reqwest::Client, url: &str) -> Self {
        match Self::try_fetch(http_client, url).await {
            Ok(table) => {
                tracing::info!(entries = table.len(), "Loaded component info table");
                table
            }
            Err(e) => {
                tracing::warn!(error = %e, "Component info table unavailable, continuing without metadata");
                Self::default()
            }
        }
    }

    async fn try_fetch(http_client: &reqwest::Client, url: &str) -> Result<Self> {
        let response = http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::SideTableUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SideTableUnavailable(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let entries: HashMap<String, ComponentInfo> = response
            .json()
            .await
            .map_err(|e| Error::SideTableUnavailable(e.to_string()))?;

        Ok(Self::new(entries))
    }

    /// Lookup never fails; unknown component types get the placeholder
    pub fn get(&self, component_type: &str) -> ComponentInfo {
        self.entries
            .get(component_type)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
