//! Pure reshaping of validated snapshots into chart-ready series.
//!
//! Everything here is total and side-effect free: validated input in, series
//! out. Running a builder twice on the same input yields structurally
//! identical output.

pub mod map_series;
pub mod ranking;
pub mod sport_groups;

pub use map_series::build_map_series;
pub use ranking::{DEFAULT_TOP_N, build_top_ranking};
pub use sport_groups::build_sport_series;
