use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::definition::QuizDefinition;
use super::domain::{MetricId, QuizId, ResultId};
use super::scoring::ArchetypeMatch;

/// A metric score as persisted, with its rank against earlier takers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedMetricScore {
    pub metric_id: MetricId,
    pub metric_name: String,
    pub score: f64,
    pub percentile: u8,
}

/// Repository record for one completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub result_id: ResultId,
    pub quiz_id: QuizId,
    pub best_match: Option<ArchetypeMatch>,
    pub ranking: Vec<ArchetypeMatch>,
    pub metric_scores: Vec<RecordedMetricScore>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResultRecord {
    pub fn headline(&self) -> String {
        match &self.best_match {
            Some(best) => format!(
                "{} ({:.1}% match)",
                best.archetype_name, best.match_score
            ),
            None => "no archetype defined".to_string(),
        }
    }

    pub fn score_for(&self, metric_id: &MetricId) -> Option<&RecordedMetricScore> {
        self.metric_scores
            .iter()
            .find(|recorded| &recorded.metric_id == metric_id)
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait QuizRepository: Send + Sync {
    fn insert_quiz(&self, definition: QuizDefinition) -> Result<QuizDefinition, RepositoryError>;
    fn fetch_quiz(&self, id: &QuizId) -> Result<Option<QuizDefinition>, RepositoryError>;
    fn insert_result(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError>;
    fn fetch_result(
        &self,
        quiz_id: &QuizId,
        result_id: &ResultId,
    ) -> Result<Option<QuizResultRecord>, RepositoryError>;
    /// Every stored score for one metric of one quiz, in any order.
    fn metric_population(
        &self,
        quiz_id: &QuizId,
        metric_id: &MetricId,
    ) -> Result<Vec<f64>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
