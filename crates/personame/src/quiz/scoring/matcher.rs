use super::super::domain::Archetype;
use super::{ArchetypeMatch, MetricScore};

const PERFECT_MATCH: f64 = 100.0;

/// Relevance-weighted root-mean-square distance between the scores and an archetype.
///
/// Targets without a corresponding score are skipped entirely. When no relevance
/// accumulates the divisor falls back to 1, so an archetype with nothing to compare
/// sits at distance 0.
pub fn archetype_distance(scores: &[MetricScore], archetype: &Archetype) -> f64 {
    let mut weighted_squares = 0.0;
    let mut total_relevance = 0.0;

    for target in &archetype.targets {
        let Some(score) = scores
            .iter()
            .find(|score| score.metric_id == target.metric_id)
        else {
            continue;
        };

        let diff = score.score - target.target_value;
        weighted_squares += diff.powi(2) * target.relevance;
        total_relevance += target.relevance;
    }

    let divisor = if total_relevance == 0.0 || total_relevance.is_nan() {
        1.0
    } else {
        total_relevance
    };

    // f64::max drops NaN, which keeps negative or NaN relevance from escaping as distance.
    (weighted_squares / divisor).max(0.0).sqrt()
}

pub fn match_archetype(scores: &[MetricScore], archetype: &Archetype) -> ArchetypeMatch {
    let distance = archetype_distance(scores, archetype);
    ArchetypeMatch {
        archetype_id: archetype.id.clone(),
        archetype_name: archetype.name.clone(),
        match_score: (PERFECT_MATCH - distance).max(0.0),
        distance,
    }
}

/// Match every archetype, preserving catalog order.
pub fn match_archetypes(scores: &[MetricScore], archetypes: &[Archetype]) -> Vec<ArchetypeMatch> {
    archetypes
        .iter()
        .map(|archetype| match_archetype(scores, archetype))
        .collect()
}

/// Highest match score wins; an exact tie keeps the archetype listed first.
pub fn find_best_match(scores: &[MetricScore], archetypes: &[Archetype]) -> Option<ArchetypeMatch> {
    match_archetypes(scores, archetypes)
        .into_iter()
        .reduce(|best, current| {
            if current.match_score > best.match_score {
                current
            } else {
                best
            }
        })
}
