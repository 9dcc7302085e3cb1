//! Shared "chart pipeline" logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! resolve source -> load snapshot -> validate -> transform
//!
//! The CLI layer can then focus on presentation (reports, previews, exports).

use crate::data::{NationSnapshot, SourceSpec, SportSnapshot, StatsSource, ingest};
use crate::domain::{GroupedSeries, TopRanking};
use crate::error::AppError;
use crate::transform;

/// Computed outputs of a `podium map` run.
#[derive(Debug, Clone)]
pub struct MapRun {
    pub snapshot: NationSnapshot,
    pub series: Vec<GroupedSeries>,
}

/// Computed outputs of a `podium bar` run.
#[derive(Debug, Clone)]
pub struct RankingRun {
    pub snapshot: NationSnapshot,
    pub ranking: TopRanking,
}

/// Computed outputs of a `podium bubble` run.
#[derive(Debug, Clone)]
pub struct SportRun {
    pub snapshot: SportSnapshot,
    pub series: Vec<GroupedSeries>,
}

/// Build the three per-medal map series.
pub fn run_map(spec: &SourceSpec) -> Result<MapRun, AppError> {
    let snapshot = load_nations(spec)?;
    let series = transform::build_map_series(&snapshot.records);
    Ok(MapRun { snapshot, series })
}

/// Build the top-N ranking.
pub fn run_ranking(spec: &SourceSpec, top: usize) -> Result<RankingRun, AppError> {
    if top == 0 {
        return Err(AppError::usage("--top must be at least 1."));
    }
    let snapshot = load_nations(spec)?;
    let ranking = transform::build_top_ranking(&snapshot.records, top);
    Ok(RankingRun { snapshot, ranking })
}

/// Build the per-sport grouped series.
pub fn run_sports(spec: &SourceSpec) -> Result<SportRun, AppError> {
    let source = StatsSource::new(spec.clone());
    let snapshot = ingest::validate_sport_table(source.load_sport_table()?)?;
    let series = transform::build_sport_series(&snapshot.table);
    Ok(SportRun { snapshot, series })
}

fn load_nations(spec: &SourceSpec) -> Result<NationSnapshot, AppError> {
    let source = StatsSource::new(spec.clone());
    ingest::validate_nations(source.load_nations()?)
}
