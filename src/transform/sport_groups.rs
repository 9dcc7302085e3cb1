//! Per-sport grouped series for the packed-bubble chart.

use indexmap::IndexMap;

use crate::domain::{ChartPoint, GroupedSeries, SportMedalTable};

/// Group total medals by sport, one series per sport.
///
/// Iterates the table in document order (country, then that country's
/// sports), skips `total == 0` tuples, and accumulates points under the
/// sport's name. Series order is the order each sport is first seen across
/// that iteration; point order within a series is country document order.
///
/// Every emitted point has `value > 0` — zero-medal entries would render as
/// empty bubbles.
pub fn build_sport_series(table: &SportMedalTable) -> Vec<GroupedSeries> {
    let mut groups: IndexMap<&str, Vec<ChartPoint>> = IndexMap::new();

    for (country, sports) in table {
        for (sport, medals) in sports {
            let total = medals.total();
            if total == 0 {
                continue;
            }
            groups
                .entry(sport.as_str())
                .or_default()
                .push(ChartPoint::new(country.clone(), total));
        }
    }

    groups
        .into_iter()
        .map(|(name, data)| GroupedSeries {
            name: name.to_string(),
            data,
        })
        .collect()
}
