//! Per-medal series for the world-map chart.

use crate::domain::{ChartPoint, GroupedSeries, Medal, NationMedalRecord};

/// Build the three map series (Gold, Silver, Bronze).
///
/// Each series carries one point per input record with `value` set to that
/// medal's count. Point order follows input order; nothing is sorted or
/// filtered here — the map joins points to countries by name and an explicit
/// zero is a meaningful shade.
pub fn build_map_series(records: &[NationMedalRecord]) -> Vec<GroupedSeries> {
    Medal::ALL
        .iter()
        .map(|&medal| GroupedSeries {
            name: medal.display_name().to_string(),
            data: records
                .iter()
                .map(|r| ChartPoint::new(r.country.clone(), medal.count_in(&r.medals)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MedalCounts;

    fn record(country: &str, gold: u32, silver: u32, bronze: u32) -> NationMedalRecord {
        NationMedalRecord {
            country: country.to_string(),
            medals: MedalCounts::new(gold, silver, bronze),
        }
    }

    #[test]
    fn three_series_one_point_per_record() {
        let records = vec![record("USA", 5, 3, 2), record("FRA", 1, 1, 1)];
        let series = build_map_series(&records);

        assert_eq!(series.len(), 3);
        for s in &series {
            assert_eq!(s.data.len(), records.len());
        }

        assert_eq!(series[0].name, "Gold");
        assert_eq!(
            series[0].data,
            vec![ChartPoint::new("USA", 5), ChartPoint::new("FRA", 1)]
        );
        assert_eq!(series[1].data[0], ChartPoint::new("USA", 3));
        assert_eq!(series[2].data[1], ChartPoint::new("FRA", 1));
    }

    #[test]
    fn input_order_is_preserved() {
        let records = vec![
            record("GER", 0, 0, 1),
            record("AUS", 9, 0, 0),
            record("JPN", 4, 4, 4),
        ];
        let series = build_map_series(&records);

        let names: Vec<&str> = series[0].data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["GER", "AUS", "JPN"]);
    }

    #[test]
    fn empty_input_yields_three_empty_series() {
        let series = build_map_series(&[]);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|s| s.data.is_empty()));
    }

    #[test]
    fn rerun_is_structurally_identical() {
        let records = vec![record("USA", 5, 3, 2), record("FRA", 1, 1, 1)];
        assert_eq!(build_map_series(&records), build_map_series(&records));
    }
}
