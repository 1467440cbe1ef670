//! Raw wire types for per-template match documents
//!
//! One document corresponds to one template's detection run. The producing
//! pipeline emitted several shapes over time: the component type may sit on
//! the document or on individual matches (historically under the German
//! field name `bauteil`), the count may be declared or implied, and the
//! locally exported variant carries its own `summary` mapping plus
//! bounding boxes instead of positions. Everything optional here is
//! genuinely optional in the wild.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pixel coordinates on the reference plan image. No scaling or transform
/// is ever applied to these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One raw unit of input: a single template's detection run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    /// Component type for every match in this document
    #[serde(default, alias = "bauteil", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    /// Declared detection count; wins over the match-list length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Alternate aggregate form (template name to count), taken verbatim
    /// instead of deriving counts from the match list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<BTreeMap<String, u64>>,

    /// Detected occurrences, in the producer's order
    #[serde(default)]
    pub matches: Vec<RawMatch>,
}

/// One detected occurrence of a symbol on the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    /// Identifier of the matched template
    pub template: String,

    /// Match-level component type; only consulted when the document
    /// declares none
    #[serde(default, alias = "bauteil", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    /// Pixel position on the plan; absent matches are kept but cannot be
    /// plotted as points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// `[x, y, width, height]` in plan pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<[f64; 4]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trip() {
        let json = r#"{
            "component_type": "Valve",
            "count": 2,
            "matches": [
                {"template": "v1", "position": {"x": 10.0, "y": 20.0}},
                {"template": "v1", "position": {"x": 30.0, "y": 5.0}}
            ]
        }"#;

        let document: RawDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.component_type.as_deref(), Some("Valve"));
        assert_eq!(document.count, Some(2));
        assert_eq!(document.matches.len(), 2);
        assert_eq!(document.matches[0].position, Some(Position { x: 10.0, y: 20.0 }));

        let round_tripped: RawDocument =
            serde_json::from_str(&serde_json::to_string(&document).unwrap()).unwrap();
        assert_eq!(round_tripped.count, Some(2));
        assert_eq!(round_tripped.matches.len(), 2);
    }

    #[test]
    fn test_bauteil_alias_accepted() {
        let json = r#"{"bauteil": "Sensor", "matches": [{"template": "s1", "bauteil": "Sensor"}]}"#;

        let document: RawDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.component_type.as_deref(), Some("Sensor"));
        assert_eq!(document.matches[0].component_type.as_deref(), Some("Sensor"));
    }

    #[test]
    fn test_missing_fields_default() {
        let document: RawDocument = serde_json::from_str("{}").unwrap();
        assert!(document.component_type.is_none());
        assert!(document.count.is_none());
        assert!(document.summary.is_none());
        assert!(document.matches.is_empty());
    }

    #[test]
    fn test_summary_mapping_shape() {
        let json = r#"{
            "summary": {"sensor": 3},
            "matches": [{"template": "sensor", "bounding_box": [1.0, 2.0, 3.0, 4.0]}]
        }"#;

        let document: RawDocument = serde_json::from_str(json).unwrap();
        let summary = document.summary.unwrap();
        assert_eq!(summary.get("sensor"), Some(&3));
        assert_eq!(document.matches[0].bounding_box, Some([1.0, 2.0, 3.0, 4.0]));
        assert!(document.matches[0].position.is_none());
    }
}
