//! Normalized match records and the per-component summary

use serde::{Deserialize, Serialize};

use super::document::Position;

/// Placeholder component type when neither the document nor its first
/// match declares one
pub const UNKNOWN_COMPONENT: &str = "Unknown";

/// Annotation rectangle in plan pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<[f64; 4]> for BoundingBox {
    /// Raw boxes are `[x, y, width, height]`: the producer's rectangle
    /// drawing adds the last two values to the anchor, so they are extents,
    /// not a second corner.
    fn from(raw: [f64; 4]) -> Self {
        Self {
            x: raw[0],
            y: raw[1],
            width: raw[2],
            height: raw[3],
        }
    }
}

impl BoundingBox {
    /// Center of the rectangle, used as the plot point for matches that
    /// carry a box but no position
    pub fn center(&self) -> Position {
        Position {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// One detected occurrence with its component type resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub template: String,
    pub component_type: String,
    pub position: Option<Position>,
    pub bounding_box: Option<BoundingBox>,
}

impl SymbolMatch {
    /// Where to draw this match, if anywhere: the explicit position, or
    /// the bounding-box center as fallback
    pub fn plot_point(&self) -> Option<Position> {
        self.position
            .or_else(|| self.bounding_box.map(|rectangle| rectangle.center()))
    }

    /// Matches without position or box are kept for listings but excluded
    /// from the spatial view
    pub fn is_plottable(&self) -> bool {
        self.position.is_some() || self.bounding_box.is_some()
    }
}

/// One summary row: a label (component type, or a verbatim template name
/// when the producer supplied its own aggregate) and its detection count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub label: String,
    pub count: u64,
}

/// Per-component detection counts in first-seen order
///
/// Duplicate labels merge by addition; the entry keeps its original
/// position so the display order stays stable across documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn add(&mut self, label: &str, count: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.label == label) {
            entry.count += count;
        } else {
            self.entries.push(SummaryEntry {
                label: label.to_string(),
                count,
            });
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Output of one normalizer run: the flat match sequence plus the summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchData {
    pub matches: Vec<SymbolMatch>,
    pub summary: Summary,
}
