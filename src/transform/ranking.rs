//! Top-N nation ranking for the bar chart.

use std::cmp::Reverse;

use crate::domain::{CategorySeries, Medal, NationMedalRecord, TopRanking};

/// Default ranking depth (the classic "top 4 nations" chart).
pub const DEFAULT_TOP_N: usize = 4;

/// Rank nations by total medals and keep the first `k`.
///
/// The sort is stable and descending by `gold + silver + bronze`, so nations
/// with equal totals keep their original input order. That tie-break is part
/// of the contract: the same snapshot always produces the same ranking.
///
/// If fewer than `k` records exist, all of them are returned.
pub fn build_top_ranking(records: &[NationMedalRecord], k: usize) -> TopRanking {
    let mut ranked: Vec<&NationMedalRecord> = records.iter().collect();
    ranked.sort_by_key(|r| Reverse(r.medals.total()));
    ranked.truncate(k);

    let categories = ranked.iter().map(|r| r.country.clone()).collect();

    let series = Medal::ALL
        .iter()
        .map(|&medal| CategorySeries {
            name: medal.display_name().to_string(),
            data: ranked.iter().map(|r| medal.count_in(&r.medals)).collect(),
        })
        .collect();

    TopRanking { categories, series }
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
    fn ranks_descending_and_aligns_series() {
        let records = vec![
            record("FRA", 1, 1, 1),
            record("USA", 5, 3, 2),
            record("GER", 2, 2, 2),
        ];
        let ranking = build_top_ranking(&records, DEFAULT_TOP_N);

        assert_eq!(ranking.categories, ["USA", "GER", "FRA"]);
        assert_eq!(ranking.series.len(), 3);
        for s in &ranking.series {
            assert_eq!(s.data.len(), ranking.categories.len());
        }
        // Positional alignment: USA is index 0 in every series.
        assert_eq!(ranking.series[0].data, vec![5, 2, 1]);
        assert_eq!(ranking.series[1].data, vec![3, 2, 1]);
        assert_eq!(ranking.series[2].data, vec![2, 2, 1]);
    }

    #[test]
    fn equal_totals_keep_input_order() {
        // Totals: 10, 8, 8, 3, 1 — the two 8s must stay in input order.
        let records = vec![
            record("USA", 10, 0, 0),
            record("GER", 8, 0, 0),
            record("FRA", 0, 8, 0),
            record("AUS", 0, 0, 3),
            record("JPN", 1, 0, 0),
        ];
        let ranking = build_top_ranking(&records, 4);

        assert_eq!(ranking.categories.len(), 4);
        assert_eq!(ranking.categories, ["USA", "GER", "FRA", "AUS"]);
    }

    #[test]
    fn short_input_returns_all_entries() {
        let records = vec![record("USA", 1, 0, 0), record("FRA", 0, 1, 0)];
        let ranking = build_top_ranking(&records, 4);

        assert_eq!(ranking.categories.len(), 2);
        for s in &ranking.series {
            assert_eq!(s.data.len(), 2);
        }
    }

    #[test]
    fn k_zero_is_empty() {
        let records = vec![record("USA", 1, 0, 0)];
        let ranking = build_top_ranking(&records, 0);
        assert!(ranking.categories.is_empty());
        assert!(ranking.series.iter().all(|s| s.data.is_empty()));
    }

    #[test]
    fn rerun_is_structurally_identical() {
        let records = vec![
            record("USA", 5, 3, 2),
            record("FRA", 1, 1, 1),
            record("GER", 2, 2, 2),
        ];
        assert_eq!(
            build_top_ranking(&records, 2),
            build_top_ranking(&records, 2)
        );
    }
}
