//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during transformation
//! - exported to chart-document JSON
//! - reloaded later for comparisons or re-rendering

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The three medal kinds, in podium order.
///
/// Each kind maps to one chart series; the order here is the series order in
/// every export (Gold first, Bronze last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    /// Series name used in reports and chart documents.
    pub fn display_name(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// Hover highlight color for the map chart.
    pub fn hover_color(self) -> &'static str {
        match self {
            Medal::Gold => "#FFD700",
            Medal::Silver => "#C0C0C0",
            Medal::Bronze => "#CD7F32",
        }
    }

    /// Select this medal's count out of a triple.
    pub fn count_in(self, counts: &MedalCounts) -> u32 {
        match self {
            Medal::Gold => counts.gold,
            Medal::Silver => counts.silver,
            Medal::Bronze => counts.bronze,
        }
    }
}

/// A gold/silver/bronze triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCounts {
    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self { gold, silver, bronze }
    }

    /// Total medals across the three kinds.
    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// One country's overall medal counts, as found in `fullStat_nation.json`.
///
/// On the wire the counts sit next to `country` (`{country, gold, silver,
/// bronze}`); `flatten` keeps the in-memory shape grouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationMedalRecord {
    pub country: String,
    #[serde(flatten)]
    pub medals: MedalCounts,
}

/// Per-country, per-sport medal counts, as found in `full_sport_by_country.json`.
///
/// `IndexMap` keeps the JSON object order; grouping relies on it ("first seen
/// in the document" is the series order contract).
pub type SportMedalTable = IndexMap<String, IndexMap<String, MedalCounts>>;

/// A label/magnitude pair consumed by map and bubble series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: u32,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named collection of chart points (one medal kind, or one sport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSeries {
    pub name: String,
    pub data: Vec<ChartPoint>,
}

/// A named sequence of bare values, positionally aligned with a shared
/// category list (bar chart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub name: String,
    pub data: Vec<u32>,
}

/// Output of the top-N ranking: the category axis plus one aligned series per
/// medal kind.
///
/// Invariant: `series.len() == 3` and every `series[i].data.len()`
/// equals `categories.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopRanking {
    pub categories: Vec<String>,
    pub series: Vec<CategorySeries>,
}

/// Summary stats about a validated nation snapshot (for report headers).
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_countries: usize,
    pub gold_total: u64,
    pub silver_total: u64,
    pub bronze_total: u64,
    /// Country with the highest total, ties resolved by input order.
    pub top_country: Option<String>,
    pub top_country_total: u32,
}

impl DatasetStats {
    pub fn grand_total(&self) -> u64 {
        self.gold_total + self.silver_total + self.bronze_total
    }
}
