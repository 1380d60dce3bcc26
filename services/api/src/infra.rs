use metrics_exporter_prometheus::PrometheusHandle;
use personame::quiz::{
    MetricId, QuestionResponse, QuizDefinition, QuizId, QuizRepository, QuizResultRecord,
    RepositoryError, ResultId,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryQuizRepository {
    quizzes: Arc<Mutex<HashMap<QuizId, QuizDefinition>>>,
    results: Arc<Mutex<Vec<QuizResultRecord>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
}

impl QuizRepository for InMemoryQuizRepository {
    fn insert_quiz(&self, definition: QuizDefinition) -> Result<QuizDefinition, RepositoryError> {
        let mut guard = lock(&self.quizzes)?;
        if guard.contains_key(&definition.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(definition.id.clone(), definition.clone());
        Ok(definition)
    }

    fn fetch_quiz(&self, id: &QuizId) -> Result<Option<QuizDefinition>, RepositoryError> {
        let guard = lock(&self.quizzes)?;
        Ok(guard.get(id).cloned())
    }

    fn insert_result(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        let mut guard = lock(&self.results)?;
        if guard
            .iter()
            .any(|stored| stored.result_id == record.result_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch_result(
        &self,
        quiz_id: &QuizId,
        result_id: &ResultId,
    ) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = lock(&self.results)?;
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
        let guard = lock(&self.results)?;
        Ok(guard
            .iter()
            .filter(|record| &record.quiz_id == quiz_id)
            .filter_map(|record| record.score_for(metric_id))
            .map(|recorded| recorded.score)
            .collect())
    }
}

/// Parse a `QUESTION=ANSWER` pair from the command line.
pub(crate) fn parse_answer(raw: &str) -> Result<QuestionResponse, String> {
    let (question, answer) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=ANSWER, got '{raw}'"))?;
    let (question, answer) = (question.trim(), answer.trim());
    if question.is_empty() || answer.is_empty() {
        return Err(format!("question and answer must both be set in '{raw}'"));
    }
    Ok(QuestionResponse::new(question, answer))
}
