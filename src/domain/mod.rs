//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - medal snapshot inputs (`NationMedalRecord`, `SportMedalTable`)
//! - chart-ready series shapes (`ChartPoint`, `GroupedSeries`, `CategorySeries`)
//! - ranking output (`TopRanking`) and dataset summary stats

pub mod types;

pub use types::*;
