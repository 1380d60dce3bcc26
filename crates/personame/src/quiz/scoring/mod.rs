//! Pure scoring core: metric scores, archetype matching, percentile ranking.
//!
//! Nothing here performs I/O or keeps state, so every function is safe to call from
//! any number of concurrent quiz sessions.

mod matcher;
mod metrics;
mod percentile;

pub use matcher::{archetype_distance, find_best_match, match_archetype, match_archetypes};
pub use metrics::{score_metrics, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};
pub use percentile::{percentile, NEUTRAL_PERCENTILE};

use serde::{Deserialize, Serialize};

use super::definition::QuizDefinition;
use super::domain::{AnsweredOption, ArchetypeId, MetricId};

/// Score of one metric after all selected answers were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric_id: MetricId,
    pub metric_name: String,
    pub score: f64,
}

/// Closeness of a taker's scores to one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeMatch {
    pub archetype_id: ArchetypeId,
    pub archetype_name: String,
    pub match_score: f64,
    pub distance: f64,
}

/// Stateless scorer that runs the core against a full quiz definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizScorer;

impl QuizScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, definition: &QuizDefinition, answered: &[AnsweredOption]) -> ScoringOutcome {
        let metric_scores = score_metrics(answered, &definition.metrics);
        let best_match = find_best_match(&metric_scores, &definition.archetypes);

        let mut ranking = match_archetypes(&metric_scores, &definition.archetypes);
        ranking.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        ScoringOutcome {
            metric_scores,
            best_match,
            ranking,
        }
    }
}

/// Scores plus every archetype ordered from closest to furthest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub metric_scores: Vec<MetricScore>,
    pub best_match: Option<ArchetypeMatch>,
    pub ranking: Vec<ArchetypeMatch>,
}
