//! Match normalization
//!
//! Reconciles the loosely structured per-template documents into one flat
//! match sequence plus a per-component summary. The producing pipeline
//! emitted several document shapes over time; the rules here cover all of
//! them:
//!
//! - component type: the document's own field, else the first match's
//!   field, else "Unknown" — applied to every match of the document
//! - count: the declared `count`, else the match-list length
//! - a document carrying its own `summary` mapping contributes that
//!   mapping verbatim and no derived count
//!
//! Flattening keeps document order, then within-document order. Matches
//! without coordinates are kept (flagged non-plottable), never dropped.

use bauview_common::models::{
    BoundingBox, MatchData, RawDocument, SymbolMatch, UNKNOWN_COMPONENT,
};

/// Normalize a batch of raw documents into display-ready match data
pub fn normalize(documents: &[RawDocument]) -> MatchData {
    let mut data = MatchData::default();

    for document in documents {
        let component_type = resolve_component_type(document);

        if let Some(mapping) = &document.summary {
            // Aggregate supplied by the producer, taken verbatim; its keys
            // are template names rather than component types
            for (template, count) in mapping {
                data.summary.add(template, *count);
            }
        } else if !is_empty_document(document) {
            let count = document.count.unwrap_or(document.matches.len() as u64);
            data.summary.add(&component_type, count);
        }

        for raw in &document.matches {
            data.matches.push(SymbolMatch {
                template: raw.template.clone(),
                component_type: component_type.clone(),
                position: raw.position,
                bounding_box: raw.bounding_box.map(BoundingBox::from),
            });
        }
    }

    data
}

/// Precedence: document field, first match's field, placeholder
fn resolve_component_type(document: &RawDocument) -> String {
    if let Some(component_type) = &document.component_type {
        return component_type.clone();
    }
    if let Some(component_type) = document
        .matches
        .first()
        .and_then(|first| first.component_type.as_ref())
    {
        return component_type.clone();
    }
    UNKNOWN_COMPONENT.to_string()
}

/// A document that declares nothing and matches nothing claims no summary
/// slot; one that declares a component type or a count still contributes,
/// even at count zero.
fn is_empty_document(document: &RawDocument) -> bool {
    document.component_type.is_none() && document.count.is_none() && document.matches.is_empty()
}
