//! GitHub results-repository source
//!
//! Lists the results folder via the GitHub contents API, then fetches
//! every `.json` document in it. One bad file never aborts the batch; an
//! unreachable or malformed listing does, and the caller renders an empty
//! state for it.

use async_trait::async_trait;
use bauview_common::config::Config;
use bauview_common::models::RawDocument;
use bauview_common::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

use super::source::RecordSource;

const GITHUB_API_BASE_URL: &str = "https://api.github.com/repos";
const USER_AGENT: &str = "bauview/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One entry of a contents listing (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub download_url: Option<String>,
}

/// Remote record source backed by a GitHub repository folder
pub struct GithubSource {
    http_client: reqwest::Client,
    repo: String,
    folder: String,
    branch: String,
    token: Option<String>,
}

impl GithubSource {
    pub fn new(
        repo: String,
        folder: String,
        branch: String,
        token: Option<String>,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Internal(e.to_string()))?;

        Ok(Self {
            http_client,
            repo,
            folder,
            branch,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.repo.clone(),
            config.folder.clone(),
            config.branch.clone(),
            config.token.clone(),
        )
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/{}/contents/{}?ref={}",
            GITHUB_API_BASE_URL, self.repo, self.folder, self.branch
        )
    }

    /// Credential is optional; public repositories need none
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http_client.get(url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        request
    }

    async fn list_entries(&self) -> Result<Vec<ListingEntry>> {
        let url = self.listing_url();
        tracing::debug!(url = %url, "Listing match documents");

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SourceUnavailable(format!(
                "listing returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        parse_listing(body)
    }

    async fn fetch_document(&self, entry: &ListingEntry) -> Result<RawDocument> {
        let url = entry
            .download_url
            .as_deref()
            .ok_or_else(|| Error::DocumentFetch {
                name: entry.name.clone(),
                reason: "listing entry has no download URL".to_string(),
            })?;

        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| Error::DocumentFetch {
                name: entry.name.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::DocumentFetch {
                name: entry.name.clone(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| Error::DocumentFetch {
            name: entry.name.clone(),
            reason: e.to_string(),
        })?;

        decode_document(&entry.name, &body)
    }
}

#[async_trait]
impl RecordSource for GithubSource {
    fn descriptor(&self) -> String {
        format!("github:{}/{}@{}", self.repo, self.folder, self.branch)
    }

    async fn fetch_documents(&self) -> Result<Vec<RawDocument>> {
        let entries = self.list_entries().await?;

        let mut documents = Vec::new();
        for entry in entries.iter().filter(|entry| entry.name.ends_with(".json")) {
            match self.fetch_document(entry).await {
                Ok(document) => {
                    tracing::debug!(name = %entry.name, matches = document.matches.len(), "Fetched match document");
                    documents.push(document);
                }
                Err(e) => {
                    tracing::warn!(name = %entry.name, error = %e, "Skipping match document");
                }
            }
        }

        tracing::info!(
            source = %self.descriptor(),
            documents = documents.len(),
            "Loaded match documents"
        );
        Ok(documents)
    }
}

/// The contents API answers errors as a JSON object, not an array. Treat
/// anything that is not an array of entries as "no data".
fn parse_listing(body: serde_json::Value) -> Result<Vec<ListingEntry>> {
    let values = match body {
        serde_json::Value::Array(values) => values,
        _ => {
            return Err(Error::SourceUnavailable(
                "listing response is not a directory listing".to_string(),
            ))
        }
    };

    let mut entries = Vec::new();
    for value in values {
        match serde_json::from_value::<ListingEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!(error = %e, "Skipping malformed listing entry"),
        }
    }
    Ok(entries)
}

/// Parse one document body; failures name the offending file
fn decode_document(name: &str, body: &str) -> Result<RawDocument> {
    serde_json::from_str(body).map_err(|e| Error::DocumentParse {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
