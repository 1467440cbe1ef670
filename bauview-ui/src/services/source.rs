//! Record source abstraction
//!
//! A record source yields the raw match documents for one render cycle.
//! The remote results repository and a local upload plug in behind the
//! same seam, so the pipeline does not care where documents came from.

use async_trait::async_trait;
use bauview_common::models::RawDocument;
use bauview_common::{Error, Result};

/// A source of raw match documents
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Stable identity of this source, used as the fetch-cache key
    fn descriptor(&self) -> String;

    /// Produce the raw documents, in stable order
    ///
    /// Implementations skip individually broken documents where more than
    /// one exists; a source with a single input fails hard instead.
    async fn fetch_documents(&self) -> Result<Vec<RawDocument>>;
}

/// Single uploaded JSON buffer (local mode)
///
/// The buffer holds exactly one document. Parse failure is a hard error:
/// it is the only input, so there is nothing to fall back to.
pub struct UploadSource {
    buffer: Vec<u8>,
}

impl UploadSource {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self { buffer }
    }
}

#[async_trait]
impl RecordSource for UploadSource {
    fn descriptor(&self) -> String {
        "upload".to_string()
    }

    async fn fetch_documents(&self) -> Result<Vec<RawDocument>> {
        let document: RawDocument =
            serde_json::from_slice(&self.buffer).map_err(|e| Error::DocumentParse {
                name: "uploaded document".to_string(),
                reason: e.to_string(),
            })?;
        Ok(vec![document])
    }
}
