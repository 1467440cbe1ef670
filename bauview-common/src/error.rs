//! Common error types for bauview

use thiserror::Error;

/// Common result type for bauview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy of the match pipeline
///
/// Each variant is terminal for its own unit of work only: a failed
/// document fetch skips that document, a missing side table empties the
/// metadata, and only an unparseable uploaded document blocks a view.
#[derive(Error, Debug)]
pub enum Error {
    /// Listing endpoint unreachable, or its response is not a directory
    /// listing. Callers render an empty state instead of aborting.
    #[error("Match source unavailable: {0}")]
    SourceUnavailable(String),

    /// A single remote document could not be retrieved
    #[error("Failed to fetch document {name}: {reason}")]
    DocumentFetch { name: String, reason: String },

    /// A document body is not valid match JSON
    #[error("Failed to parse document {name}: {reason}")]
    DocumentParse { name: String, reason: String },

    /// Component info side table could not be loaded. Swallowed at the
    /// lookup boundary; the dashboard runs without metadata.
    #[error("Component info table unavailable: {0}")]
    SideTableUnavailable(String),

    /// Reference plan image could not be retrieved
    #[error("Plan image unavailable: {0}")]
    ImageUnavailable(String),

    /// Plan image bytes are not a decodable PNG/JPEG
    #[error("Plan image decode failed: {0}")]
    ImageDecode(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
