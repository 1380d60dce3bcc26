/// Returned when there is no population to compare against.
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// Rank `score` against prior scores for the same metric.
///
/// The rank is the position of the first population entry that is `>= score` in
/// ascending order, scaled to 0-100. A score at or below the smallest entry ranks 0,
/// a score above every entry ranks 100.
pub fn percentile(score: f64, population: &[f64]) -> u8 {
    if population.is_empty() {
        return NEUTRAL_PERCENTILE;
    }

    let mut sorted = population.to_vec();
    sorted.sort_by(f64::total_cmp);

    match sorted.iter().position(|value| *value >= score) {
        None => 100,
        Some(0) => 0,
        Some(index) => ((index as f64 / sorted.len() as f64) * 100.0).round() as u8,
    }
}
