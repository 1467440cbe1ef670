//! Data model for match documents and normalized records

pub mod component_info;
pub mod document;
pub mod matches;

pub use component_info::ComponentInfo;
pub use document::{Position, RawDocument, RawMatch};
pub use matches::{BoundingBox, MatchData, Summary, SummaryEntry, SymbolMatch, UNKNOWN_COMPONENT};
