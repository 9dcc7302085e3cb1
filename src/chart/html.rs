//! HTML page assembly for exported charts.
//!
//! Exported pages are self-contained: they load the renderer from its CDN,
//! inline the chart document, and render into a single container. The map
//! page fetches the world topology at view time and attaches it to the
//! options before rendering; the topology itself stays opaque to this tool.

use std::path::Path;

use crate::chart::document::{ChartDocument, ChartKind};
use crate::chart::options::WORLD_TOPOLOGY_URL;
use crate::error::AppError;

const HIGHCHARTS_JS: &str = "https://code.highcharts.com/highcharts.js";
const HIGHCHARTS_MORE_JS: &str = "https://code.highcharts.com/highcharts-more.js";
const HIGHMAPS_JS: &str = "https://code.highcharts.com/maps/highmaps.js";

/// Render a chart document as a standalone HTML page.
pub fn render_page(doc: &ChartDocument) -> Result<String, AppError> {
    let options = serde_json::to_string(&doc.options)
        .map_err(|e| AppError::usage(format!("Failed to serialize chart options: {e}")))?;

    let title = doc.options["title"]["text"]
        .as_str()
        .unwrap_or("podium chart");
    let container = doc.kind.container_id();

    let scripts: &[&str] = match doc.kind {
        ChartKind::Map => &[HIGHMAPS_JS],
        ChartKind::Bar => &[HIGHCHARTS_JS],
        ChartKind::PackedBubble => &[HIGHCHARTS_JS, HIGHCHARTS_MORE_JS],
    };

    let render_script = match doc.kind {
        ChartKind::Map => format!(
            "Highcharts.getJSON('{WORLD_TOPOLOGY_URL}', topology => {{\n\
             \x20 options.chart = {{ map: topology }};\n\
             \x20 Highcharts.mapChart('{container}', options);\n\
             }});"
        ),
        ChartKind::Bar | ChartKind::PackedBubble => {
            format!("Highcharts.chart('{container}', options);")
        }
    };

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    for src in scripts {
        out.push_str(&format!("<script src=\"{src}\"></script>\n"));
    }
    out.push_str("<style>\n");
    out.push_str(&format!(
        "  #{container} {{ width: 100%; height: 600px; margin: 0 auto; }}\n"
    ));
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&format!("<div id=\"{container}\"></div>\n"));
    out.push_str("<script>\n");
    out.push_str(&format!("const options = {options};\n"));
    out.push_str(&render_script);
    out.push_str("\n</script>\n</body>\n</html>\n");

    Ok(out)
}

/// Write a chart document as a standalone HTML page.
pub fn write_chart_html(path: &Path, doc: &ChartDocument) -> Result<(), AppError> {
    let page = render_page(doc)?;
    std::fs::write(path, page).map_err(|e| {
        AppError::usage(format!("Failed to write HTML page '{}': {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_page_fetches_topology_at_view_time() {
        let doc = ChartDocument::new(
            ChartKind::Map,
            "fullStat_nation.json",
            json!({ "title": { "text": "Medal map" }, "series": [] }),
        );
        let page = render_page(&doc).unwrap();

        assert!(page.contains(HIGHMAPS_JS));
        assert!(page.contains(WORLD_TOPOLOGY_URL));
        assert!(page.contains("id=\"container-map\""));
        assert!(page.contains("Highcharts.mapChart('container-map', options);"));
        assert!(page.contains("<title>Medal map</title>"));
    }

    #[test]
    fn bubble_page_loads_the_more_module() {
        let doc = ChartDocument::new(
            ChartKind::PackedBubble,
            "full_sport_by_country.json",
            json!({ "series": [] }),
        );
        let page = render_page(&doc).unwrap();

        assert!(page.contains(HIGHCHARTS_JS));
        assert!(page.contains(HIGHCHARTS_MORE_JS));
        assert!(!page.contains(WORLD_TOPOLOGY_URL));
        assert!(page.contains("Highcharts.chart('container-bubble', options);"));
        // No title in the options: the page falls back to a generic one.
        assert!(page.contains("<title>podium chart</title>"));
    }
}
