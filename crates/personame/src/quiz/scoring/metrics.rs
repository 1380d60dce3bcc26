use std::collections::HashMap;

use super::super::domain::{AnsweredOption, Metric, MetricId};
use super::MetricScore;

/// Starting value for every metric; no signal reads as neutral rather than zero.
pub const NEUTRAL_SCORE: f64 = 50.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Fold the selected answers' weights into one clamped score per metric.
///
/// Output follows the order of `metrics`. Weights that reference a metric outside
/// `metrics`, or whose value is not finite, are skipped.
pub fn score_metrics(answered: &[AnsweredOption], metrics: &[Metric]) -> Vec<MetricScore> {
    let mut totals: HashMap<&MetricId, f64> = metrics
        .iter()
        .map(|metric| (&metric.id, NEUTRAL_SCORE))
        .collect();

    for weight in answered.iter().flat_map(|option| option.weights.iter()) {
        if !weight.value.is_finite() {
            continue;
        }
        if let Some(total) = totals.get_mut(&weight.metric_id) {
            *total += weight.value;
        }
    }

    metrics
        .iter()
        .map(|metric| {
            let total = totals.get(&metric.id).copied().unwrap_or(NEUTRAL_SCORE);
            MetricScore {
                metric_id: metric.id.clone(),
                metric_name: metric.name.clone(),
                score: total.clamp(MIN_SCORE, MAX_SCORE),
            }
        })
        .collect()
}
