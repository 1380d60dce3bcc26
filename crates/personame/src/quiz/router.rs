use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::definition::QuizDefinition;
use super::domain::{QuizId, QuizSubmission, ResultId};
use super::repository::{QuizRepository, RepositoryError};
use super::scoring::percentile;
use super::service::{QuizService, QuizServiceError};

/// Router builder exposing quiz authoring, taking, and result lookup.
pub fn quiz_router<R>(service: Arc<QuizService<R>>) -> Router
where
    R: QuizRepository + 'static,
{
    Router::new()
        .route("/api/v1/quizzes", post(register_handler::<R>))
        .route("/api/v1/quizzes/:quiz_id", get(definition_handler::<R>))
        .route("/api/v1/quizzes/:quiz_id/results", post(take_handler::<R>))
        .route(
            "/api/v1/quizzes/:quiz_id/results/:result_id",
            get(result_handler::<R>),
        )
        .route("/api/v1/scoring/percentile", post(percentile_handler))
        .with_state(service)
}

/// Acknowledgement returned once a quiz is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummaryView {
    pub quiz_id: QuizId,
    pub title: String,
    pub metric_count: usize,
    pub archetype_count: usize,
    pub question_count: usize,
}

impl From<&QuizDefinition> for QuizSummaryView {
    fn from(definition: &QuizDefinition) -> Self {
        Self {
            quiz_id: definition.id.clone(),
            title: definition.title.clone(),
            metric_count: definition.metrics.len(),
            archetype_count: definition.archetypes.len(),
            question_count: definition.questions.len(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PercentileRequest {
    pub score: f64,
    #[serde(default)]
    pub population: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PercentileResponse {
    pub score: f64,
    pub percentile: u8,
    pub population_size: usize,
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Json(definition): Json<QuizDefinition>,
) -> Response
where
    R: QuizRepository + 'static,
{
    match service.register(definition) {
        Ok(stored) => (StatusCode::CREATED, Json(QuizSummaryView::from(&stored))).into_response(),
        Err(error) => error_response(error, "quiz"),
    }
}

pub(crate) async fn definition_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(quiz_id): Path<String>,
) -> Response
where
    R: QuizRepository + 'static,
{
    match service.definition(&QuizId(quiz_id)) {
        Ok(definition) => (StatusCode::OK, Json(definition)).into_response(),
        Err(error) => error_response(error, "quiz"),
    }
}

pub(crate) async fn take_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(quiz_id): Path<String>,
    Json(submission): Json<QuizSubmission>,
) -> Response
where
    R: QuizRepository + 'static,
{
    match service.take(&QuizId(quiz_id), &submission) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error_response(error, "quiz"),
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path((quiz_id, result_id)): Path<(String, String)>,
) -> Response
where
    R: QuizRepository + 'static,
{
    match service.result(&QuizId(quiz_id), &ResultId(result_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error, "result"),
    }
}

pub(crate) async fn percentile_handler(
    Json(request): Json<PercentileRequest>,
) -> Json<PercentileResponse> {
    Json(PercentileResponse {
        score: request.score,
        percentile: percentile(request.score, &request.population),
        population_size: request.population.len(),
    })
}

fn error_response(error: QuizServiceError, resource: &str) -> Response {
    let (status, message) = match &error {
        QuizServiceError::Definition(_) | QuizServiceError::Submission(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        QuizServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, format!("{resource} not found"))
        }
        QuizServiceError::Repository(RepositoryError::Conflict) => {
            (StatusCode::CONFLICT, format!("{resource} already exists"))
        }
        QuizServiceError::Repository(RepositoryError::Unavailable(_)) => {
            warn!(%error, "quiz repository unavailable");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };

    (status, Json(json!({ "error": message }))).into_response()
}
