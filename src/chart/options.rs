//! Renderer options per chart kind.
//!
//! These are configuration literals for the external charting library, built
//! with `serde_json::json!` around the shaped series. The series shapes are
//! the typed domain types; everything else is presentation tuning (titles,
//! axes, colors, layout constants) that the renderer consumes verbatim.

use serde_json::{Value, json};

use crate::domain::{GroupedSeries, Medal, TopRanking};

/// Remote world topology consumed by the map renderer (opaque to us; the
/// exported page fetches it at view time).
pub const WORLD_TOPOLOGY_URL: &str = "https://code.highcharts.com/mapdata/custom/world.topo.json";

/// Options for the world-map chart (one series per medal kind).
///
/// `chart.map` is intentionally absent: the topology is fetched by the page
/// and attached before rendering.
pub fn map_options(series: &[GroupedSeries]) -> Value {
    let series: Vec<Value> = series
        .iter()
        .zip(Medal::ALL)
        .map(|(s, medal)| {
            json!({
                "name": s.name,
                "data": s.data,
                "joinBy": "name",
                "states": { "hover": { "color": medal.hover_color() } },
                "dataLabels": { "enabled": false },
            })
        })
        .collect();

    json!({
        "title": {
            "text": "Medal distribution by country and type",
            "align": "left",
            "floating": true,
            "style": { "textOutline": "2px white" },
        },
        "mapNavigation": {
            "enabled": true,
            "enableDoubleClickZoomTo": true,
            "buttonOptions": { "verticalAlign": "bottom" },
        },
        "mapView": {
            "projection": { "name": "Orthographic", "rotation": [60, -30] },
            "maxZoom": 30,
        },
        "colorAxis": { "minColor": "#EFEFEF", "maxColor": "#800000" },
        "tooltip": {
            "headerFormat": "<b>{series.name}</b><br>",
            "pointFormat": "{point.name}: {point.value} medals",
        },
        "series": series,
    })
}

/// Options for the top-N bar chart.
pub fn bar_options(ranking: &TopRanking, source: &str) -> Value {
    json!({
        "chart": { "type": "bar" },
        "title": {
            "text": format!("Top {} nations - medals by type", ranking.categories.len()),
        },
        "subtitle": { "text": format!("Source: {source}") },
        "xAxis": {
            "categories": ranking.categories,
            "title": { "text": null },
            "gridLineWidth": 1,
            "lineWidth": 0,
        },
        "yAxis": {
            "min": 0,
            "title": { "text": "Medal count", "align": "high" },
            "labels": { "overflow": "justify" },
            "gridLineWidth": 0,
        },
        "tooltip": { "shared": true, "valueSuffix": " medals" },
        "plotOptions": {
            "bar": {
                "borderRadius": 5,
                "dataLabels": { "enabled": true },
                "groupPadding": 0.1,
            },
        },
        "legend": {
            "layout": "vertical",
            "align": "right",
            "verticalAlign": "top",
            "x": -40,
            "y": 80,
            "floating": true,
            "borderWidth": 1,
            "backgroundColor": "#FFFFFF",
            "shadow": true,
        },
        "credits": { "enabled": false },
        "series": ranking.series,
    })
}

/// Options for the packed-bubble chart (one series per sport).
pub fn bubble_options(series: &[GroupedSeries], source: &str) -> Value {
    json!({
        "chart": { "type": "packedbubble", "height": "100%" },
        "title": {
            "text": "Total medals by country grouped by sport",
            "align": "left",
        },
        "subtitle": { "text": format!("Source: {source}"), "align": "left" },
        "tooltip": {
            "useHTML": true,
            "pointFormat": "<b>{point.name}</b>: {point.value} medals",
        },
        "plotOptions": {
            "packedbubble": {
                "minSize": "10%",
                "maxSize": "100%",
                "zMin": 0,
                "layoutAlgorithm": {
                    "gravitationalConstant": 0.02,
                    "splitSeries": true,
                    "seriesInteraction": false,
                    "dragBetweenSeries": true,
                    "parentNodeLimit": true,
                },
                "dataLabels": {
                    "enabled": true,
                    "format": "{point.name}",
                    // Labels only on bubbles big enough to read.
                    "filter": { "property": "value", "operator": ">", "value": 1 },
                    "style": {
                        "color": "black",
                        "textOutline": "none",
                        "fontWeight": "normal",
                    },
                },
            },
        },
        "series": series,
    })
}
