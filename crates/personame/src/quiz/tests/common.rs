use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::definition::QuizDefinition;
use crate::quiz::domain::{
    Archetype, ArchetypeMetricTarget, Metric, MetricId, QuizId, ResultId,
};
use crate::quiz::repository::{QuizRepository, QuizResultRecord, RepositoryError};
use crate::quiz::scoring::MetricScore;
use crate::quiz::service::QuizService;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn personality_metrics() -> Vec<Metric> {
    vec![
        Metric::new("extraversion", "Extraversion"),
        Metric::new("openness", "Openness"),
    ]
}

pub(super) fn leader() -> Archetype {
    Archetype::new(
        "leader",
        "Leader",
        vec![
            ArchetypeMetricTarget::new("extraversion", 80.0, 1.0),
            ArchetypeMetricTarget::new("openness", 60.0, 0.5),
        ],
    )
}

pub(super) fn thinker() -> Archetype {
    Archetype::new(
        "thinker",
        "Thinker",
        vec![ArchetypeMetricTarget::new("extraversion", 20.0, 1.0)],
    )
}

pub(super) fn metric_score(metric_id: &str, score: f64) -> MetricScore {
    MetricScore {
        metric_id: MetricId::new(metric_id),
        metric_name: metric_id.to_string(),
        score,
    }
}

pub(super) fn sample_quiz() -> QuizDefinition {
    QuizDefinition::sample()
}

pub(super) fn build_service() -> (QuizService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuizService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    quizzes: Arc<Mutex<HashMap<QuizId, QuizDefinition>>>,
    results: Arc<Mutex<Vec<QuizResultRecord>>>,
}

impl MemoryRepository {
    pub(super) fn result_count(&self) -> usize {
        self.results.lock().expect("repository mutex poisoned").len()
    }
}

impl QuizRepository for MemoryRepository {
    fn insert_quiz(&self, definition: QuizDefinition) -> Result<QuizDefinition, RepositoryError> {
        let mut guard = self.quizzes.lock().expect("repository mutex poisoned");
        if guard.contains_key(&definition.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(definition.id.clone(), definition.clone());
        Ok(definition)
    }

    fn fetch_quiz(&self, id: &QuizId) -> Result<Option<QuizDefinition>, RepositoryError> {
        let guard = self.quizzes.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn insert_result(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        self.results
            .lock()
            .expect("repository mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn fetch_result(
        &self,
        quiz_id: &QuizId,
        result_id: &ResultId,
    ) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.results.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.quiz_id == quiz_id && &record.result_id == result_id)
            .cloned())
    }

    fn metric_population(
        &self,
        quiz_id: &QuizId,
        metric_id: &MetricId,
    ) -> Result<Vec<f64>, RepositoryError> {
        let guard = self.results.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.quiz_id == quiz_id)
            .filter_map(|record| record.score_for(metric_id))
            .map(|recorded| recorded.score)
            .collect())
    }
}

/// Serves the sample quiz but cannot record anything.
pub(super) struct UnavailableRepository;

impl QuizRepository for UnavailableRepository {
    fn insert_quiz(&self, _definition: QuizDefinition) -> Result<QuizDefinition, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_quiz(&self, _id: &QuizId) -> Result<Option<QuizDefinition>, RepositoryError> {
        Ok(Some(QuizDefinition::sample()))
    }

    fn insert_result(&self, _record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_result(
        &self,
        _quiz_id: &QuizId,
        _result_id: &ResultId,
    ) -> Result<Option<QuizResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn metric_population(
        &self,
        _quiz_id: &QuizId,
        _metric_id: &MetricId,
    ) -> Result<Vec<f64>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
