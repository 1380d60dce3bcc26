use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::definition::{DefinitionError, QuizDefinition};
use super::domain::{QuizId, QuizSubmission, ResultId};
use super::intake::{SubmissionError, SubmissionGuard};
use super::repository::{QuizRepository, QuizResultRecord, RecordedMetricScore, RepositoryError};
use super::scoring::{percentile, QuizScorer};

/// Service composing the submission guard, the scoring core, and the result repository.
pub struct QuizService<R> {
    repository: Arc<R>,
    scorer: QuizScorer,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_result_id() -> ResultId {
    let id = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResultId(format!("res-{id:06}"))
}

impl<R> QuizService<R>
where
    R: QuizRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            scorer: QuizScorer::new(),
        }
    }

    /// Validate and store a quiz definition.
    pub fn register(&self, definition: QuizDefinition) -> Result<QuizDefinition, QuizServiceError> {
        definition.validate()?;
        let stored = self.repository.insert_quiz(definition)?;
        info!(
            quiz_id = %stored.id,
            metrics = stored.metrics.len(),
            archetypes = stored.archetypes.len(),
            questions = stored.questions.len(),
            "quiz registered"
        );
        Ok(stored)
    }

    pub fn definition(&self, quiz_id: &QuizId) -> Result<QuizDefinition, QuizServiceError> {
        let definition = self
            .repository
            .fetch_quiz(quiz_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(definition)
    }

    /// Score a submission, rank each metric against earlier takers, and persist the result.
    pub fn take(
        &self,
        quiz_id: &QuizId,
        submission: &QuizSubmission,
    ) -> Result<QuizResultRecord, QuizServiceError> {
        let definition = self.definition(quiz_id)?;
        let answered = SubmissionGuard::new(&definition).answered_options(submission)?;
        let outcome = self.scorer.evaluate(&definition, &answered);

        let mut metric_scores = Vec::with_capacity(outcome.metric_scores.len());
        for score in outcome.metric_scores {
            let population = self
                .repository
                .metric_population(quiz_id, &score.metric_id)?;
            let rank = percentile(score.score, &population);
            debug!(
                metric_id = %score.metric_id,
                score = score.score,
                population = population.len(),
                percentile = rank,
                "metric ranked"
            );
            metric_scores.push(RecordedMetricScore {
                metric_id: score.metric_id,
                metric_name: score.metric_name,
                score: score.score,
                percentile: rank,
            });
        }

        let record = QuizResultRecord {
            result_id: next_result_id(),
            quiz_id: quiz_id.clone(),
            best_match: outcome.best_match,
            ranking: outcome.ranking,
            metric_scores,
            completed_at: Utc::now(),
        };

        let stored = self.repository.insert_result(record)?;
        info!(
            quiz_id = %stored.quiz_id,
            result_id = %stored.result_id,
            archetype = stored
                .best_match
                .as_ref()
                .map(|best| best.archetype_id.as_str())
                .unwrap_or("none"),
            "quiz result recorded"
        );
        Ok(stored)
    }

    pub fn result(
        &self,
        quiz_id: &QuizId,
        result_id: &ResultId,
    ) -> Result<QuizResultRecord, QuizServiceError> {
        let record = self
            .repository
            .fetch_result(quiz_id, result_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
