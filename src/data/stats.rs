//! Aggregates for the paid-games view.
//!
//! Every aggregate returns `None` on empty input; callers render a
//! placeholder instead.

use super::model::{GameRecord, PlayerMetric};

/// Arithmetic mean, `None` when `values` is empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median (mean of the two middle values for even lengths).
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Upper end of a zero-based axis: the largest value plus 10% headroom.
pub fn axis_upper_bound(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .map(|max| max * 1.1)
}

/// Summary numbers shown under the price scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaidSummary {
    pub count: usize,
    pub mean_price: f64,
    pub median_price: f64,
    pub metric: PlayerMetric,
    pub mean_metric: f64,
}

impl PaidSummary {
    /// Summarise `games` for `metric`. `None` if there are no games.
    pub fn compute(games: &[&GameRecord], metric: PlayerMetric) -> Option<Self> {
        let prices: Vec<f64> = games.iter().map(|g| g.price).collect();
        let players: Vec<f64> = games.iter().map(|g| metric.value(g) as f64).collect();

        Some(PaidSummary {
            count: games.len(),
            mean_price: mean(&prices)?,
            median_price: median(&prices)?,
            metric,
            mean_metric: mean(&players)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::game;

    #[test]
    fn empty_input_has_no_aggregates() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(axis_upper_bound(&[]), None);
        assert_eq!(PaidSummary::compute(&[], PlayerMetric::PeakToday), None);
    }

    #[test]
    fn mean_and_median() {
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(median(&[6.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn axis_bound_pads_maximum() {
        let bound = axis_upper_bound(&[10.0, 50.0, 20.0]).unwrap();
        assert!((bound - 55.0).abs() < 1e-9);
    }

    #[test]
    fn paid_summary_uses_selected_metric() {
        let a = game("A", 100, "Paid", "");
        let mut b = game("B", 300, "Paid", "");
        b.price = 9.99;
        let games = vec![&a, &b];

        let current = PaidSummary::compute(&games, PlayerMetric::CurrentPlayers).unwrap();
        assert_eq!(current.count, 2);
        assert!((current.mean_price - 14.99).abs() < 1e-9);
        assert!((current.mean_metric - 200.0).abs() < 1e-9);

        let peak = PaidSummary::compute(&games, PlayerMetric::PeakToday).unwrap();
        assert!((peak.mean_metric - 400.0).abs() < 1e-9);
    }
}
