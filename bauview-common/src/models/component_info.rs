//! Side-table metadata for component types

use serde::{Deserialize, Serialize};

/// Descriptive metadata for one component type
///
/// Every field is optional; a component type missing from the side table
/// yields the all-empty placeholder via `Default`. The aliases accept the
/// German keys the historical side table uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    #[serde(default, alias = "preis", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, alias = "maße", skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Interchangeable component types
    #[serde(default, alias = "alternativen", skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,

    /// Free-text notes
    #[serde(default, alias = "info", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_side_table_keys() {
        let json = r#"{
            "preis": "120 EUR",
            "maße": "40x40 mm",
            "alternativen": ["Typ B", "Typ C"],
            "info": "Standardventil"
        }"#;

        let info: ComponentInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.price.as_deref(), Some("120 EUR"));
        assert_eq!(info.dimensions.as_deref(), Some("40x40 mm"));
        assert_eq!(info.alternatives, vec!["Typ B", "Typ C"]);
        assert_eq!(info.notes.as_deref(), Some("Standardventil"));
    }

    #[test]
    fn test_empty_entry_is_all_placeholder() {
        let info: ComponentInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, ComponentInfo::default());
        assert!(info.price.is_none());
        assert!(info.alternatives.is_empty());
    }
}
