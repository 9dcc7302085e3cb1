//! ASCII bar preview for terminal output.
//!
//! This is intentionally "dumb" (fixed-width bars, integer scaling),
//! optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)

use crate::domain::TopRanking;

/// Render the top-N ranking as horizontal total-medal bars.
///
/// Bars are scaled to `width` columns against the largest total. A non-zero
/// total always gets at least one column so small entries stay visible.
pub fn render_ranking_bars(ranking: &TopRanking, width: usize) -> String {
    let width = width.max(10);
    let n = ranking.categories.len();

    let totals: Vec<u32> = (0..n)
        .map(|i| ranking.series.iter().map(|s| s.data[i]).sum())
        .collect();
    let max_total = totals.iter().copied().max().unwrap_or(0);

    let name_w = ranking
        .categories
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("Ranking: {n} nations | max total = {max_total}\n"));

    for (name, &total) in ranking.categories.iter().zip(&totals) {
        let bar = bar_len(total, max_total, width);
        out.push_str(&format!(
            "{:<name_w$} | {} {total}\n",
            name,
            "#".repeat(bar)
        ));
    }

    out
}

fn bar_len(total: u32, max_total: u32, width: usize) -> usize {
    if total == 0 || max_total == 0 {
        return 0;
    }
    let scaled = (total as usize * width) / max_total as usize;
    scaled.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MedalCounts, NationMedalRecord};
    use crate::transform::build_top_ranking;

    #[test]
    fn bars_golden_snapshot_small() {
        let records = vec![
            NationMedalRecord {
                country: "USA".to_string(),
                medals: MedalCounts::new(5, 3, 2),
            },
            NationMedalRecord {
                country: "FRA".to_string(),
                medals: MedalCounts::new(1, 1, 1),
            },
        ];
        let ranking = build_top_ranking(&records, 4);

        let txt = render_ranking_bars(&ranking, 10);
        let expected = concat!(
            "Ranking: 2 nations | max total = 10\n",
            "USA | ########## 10\n",
            "FRA | ### 3\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn zero_totals_render_empty_bars() {
        let records = vec![NationMedalRecord {
            country: "USA".to_string(),
            medals: MedalCounts::new(0, 0, 0),
        }];
        let ranking = build_top_ranking(&records, 4);

        let txt = render_ranking_bars(&ranking, 10);
        assert!(txt.contains("USA |  0\n"));
    }

    #[test]
    fn small_totals_stay_visible() {
        let records = vec![
            NationMedalRecord {
                country: "USA".to_string(),
                medals: MedalCounts::new(100, 0, 0),
            },
            NationMedalRecord {
                country: "FRA".to_string(),
                medals: MedalCounts::new(1, 0, 0),
            },
        ];
        let ranking = build_top_ranking(&records, 4);

        let txt = render_ranking_bars(&ranking, 10);
        // 1/100 scales to zero columns; the floor keeps one.
        assert!(txt.contains("FRA | # 1\n"));
    }
}
