//! Quiz authoring, taking, and scoring.
//!
//! `scoring` is the pure core. `intake` turns a taker's submission into the inputs the core
//! expects, `service` runs the core and records results through the `repository` port, and
//! `router` exposes the service over HTTP.

pub mod definition;
pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod sample;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use definition::{DefinitionError, QuizDefinition};
pub use domain::{
    AnswerId, AnswerOption, AnsweredOption, Archetype, ArchetypeId, ArchetypeMetricTarget,
    Metric, MetricId, Question, QuestionId, QuestionResponse, QuizId, QuizSubmission, ResultId,
    Weight,
};
pub use intake::{SubmissionError, SubmissionGuard};
pub use repository::{QuizRepository, QuizResultRecord, RecordedMetricScore, RepositoryError};
pub use router::{quiz_router, PercentileRequest, PercentileResponse, QuizSummaryView};
pub use scoring::{
    find_best_match, match_archetypes, percentile, score_metrics, ArchetypeMatch, MetricScore,
    QuizScorer, ScoringOutcome,
};
pub use service::{QuizService, QuizServiceError};
