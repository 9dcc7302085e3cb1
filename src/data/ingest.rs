//! Snapshot validation.
//!
//! This module turns freshly-parsed snapshots into datasets that are safe to
//! transform.
//!
//! Design goals:
//! - **Strict schema** (clear errors + exit code 3)
//! - **Row-level messages** (which record is broken, not just "bad input")
//! - **Deterministic behavior** (no hidden randomness)
//! - **Separation of concerns**: no series building here

use std::collections::HashSet;

use crate::data::source::RawDataset;
use crate::domain::{DatasetStats, NationMedalRecord, SportMedalTable};
use crate::error::AppError;

/// A validated per-nation snapshot plus its summary stats.
#[derive(Debug, Clone)]
pub struct NationSnapshot {
    pub records: Vec<NationMedalRecord>,
    pub stats: DatasetStats,
    /// Path or URL the snapshot was loaded from.
    pub source: String,
}

/// A validated per-sport snapshot.
#[derive(Debug, Clone)]
pub struct SportSnapshot {
    pub table: SportMedalTable,
    /// Path or URL the snapshot was loaded from.
    pub source: String,
}

/// Validate a per-nation snapshot.
///
/// Rejects empty snapshots, blank country names, and duplicate countries.
/// Counts are non-negative by construction (unsigned on the wire already
/// fails deserialization for negatives).
pub fn validate_nations(raw: RawDataset<Vec<NationMedalRecord>>) -> Result<NationSnapshot, AppError> {
    let RawDataset { value: records, source } = raw;

    if records.is_empty() {
        return Err(AppError::schema(format!("'{source}' contains no nation records.")));
    }

    let mut seen = HashSet::new();
    for (idx, record) in records.iter().enumerate() {
        if record.country.trim().is_empty() {
            return Err(AppError::schema(format!(
                "Record {idx} in '{source}' has a blank country name."
            )));
        }
        if !seen.insert(record.country.as_str()) {
            return Err(AppError::schema(format!(
                "Record {idx} in '{source}' duplicates country '{}'.",
                record.country
            )));
        }
    }

    let stats = compute_stats(&records);

    Ok(NationSnapshot { records, stats, source })
}

/// Validate a per-sport snapshot.
///
/// Rejects empty tables and blank country/sport keys. A country with an empty
/// sport map is allowed; it simply contributes no points.
pub fn validate_sport_table(raw: RawDataset<SportMedalTable>) -> Result<SportSnapshot, AppError> {
    let RawDataset { value: table, source } = raw;

    if table.is_empty() {
        return Err(AppError::schema(format!("'{source}' contains no countries.")));
    }

    for (country, sports) in &table {
        if country.trim().is_empty() {
            return Err(AppError::schema(format!(
                "'{source}' contains a blank country key."
            )));
        }
        for sport in sports.keys() {
            if sport.trim().is_empty() {
                return Err(AppError::schema(format!(
                    "Country '{country}' in '{source}' has a blank sport key."
                )));
            }
        }
    }

    Ok(SportSnapshot { table, source })
}

/// Summary stats over a validated record list.
///
/// The leading country is the highest total; ties keep the earliest record,
/// consistent with the ranking tie-break.
fn compute_stats(records: &[NationMedalRecord]) -> DatasetStats {
    let mut stats = DatasetStats {
        n_countries: records.len(),
        gold_total: 0,
        silver_total: 0,
        bronze_total: 0,
        top_country: None,
        top_country_total: 0,
    };

    for record in records {
        stats.gold_total += u64::from(record.medals.gold);
        stats.silver_total += u64::from(record.medals.silver);
        stats.bronze_total += u64::from(record.medals.bronze);

        let total = record.medals.total();
        if stats.top_country.is_none() || total > stats.top_country_total {
            stats.top_country = Some(record.country.clone());
            stats.top_country_total = total;
        }
    }

    stats
}
