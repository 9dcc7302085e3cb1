//! Portable chart documents.
//!
//! A chart document is the bundle handed to the external renderer:
//! fully-shaped series plus the renderer options, with a little provenance
//! (tool, date, source snapshot). It is the JSON export format and the
//! payload embedded in exported HTML pages.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Which renderer a document targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Map,
    Bar,
    PackedBubble,
}

impl ChartKind {
    /// DOM container id the exported page renders into.
    pub fn container_id(self) -> &'static str {
        match self {
            ChartKind::Map => "container-map",
            ChartKind::Bar => "container-bar",
            ChartKind::PackedBubble => "container-bubble",
        }
    }
}

/// A renderer-ready chart bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument {
    pub tool: String,
    pub kind: ChartKind,
    pub generated_on: NaiveDate,
    /// Path or URL of the snapshot the series were built from.
    pub source: String,
    /// Renderer configuration object, series included.
    pub options: Value,
}

impl ChartDocument {
    pub fn new(kind: ChartKind, source: impl Into<String>, options: Value) -> Self {
        Self {
            tool: "podium".to_string(),
            kind,
            generated_on: chrono::Local::now().date_naive(),
            source: source.into(),
            options,
        }
    }
}

/// Write a chart document as pretty JSON.
pub fn write_chart_json(path: &Path, doc: &ChartDocument) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create chart JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, doc)
        .map_err(|e| AppError::usage(format!("Failed to write chart JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_serializes_kind_and_options() {
        let doc = ChartDocument::new(
            ChartKind::PackedBubble,
            "full_sport_by_country.json",
            json!({ "series": [] }),
        );

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["tool"], "podium");
        assert_eq!(value["kind"], "packedbubble");
        assert_eq!(value["source"], "full_sport_by_country.json");
        assert!(value["options"]["series"].is_array());
    }

    #[test]
    fn container_ids_are_distinct() {
        let ids = [
            ChartKind::Map.container_id(),
            ChartKind::Bar.container_id(),
            ChartKind::PackedBubble.container_id(),
        ];
        assert_eq!(
            ids.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }
}
