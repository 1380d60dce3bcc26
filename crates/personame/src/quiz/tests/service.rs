use super::common::*;
use crate::quiz::definition::DefinitionError;
use crate::quiz::domain::{MetricId, QuizId, ResultId};
use crate::quiz::repository::RepositoryError;
use crate::quiz::sample::{sample_prior_submissions, sample_submission, SAMPLE_QUIZ_ID};
use crate::quiz::service::{QuizService, QuizServiceError};
use crate::quiz::SubmissionError;
use std::sync::Arc;

fn sample_id() -> QuizId {
    QuizId::new(SAMPLE_QUIZ_ID)
}

#[test]
fn register_rejects_invalid_definitions() {
    let (service, _) = build_service();
    let mut quiz = sample_quiz();
    quiz.title.clear();

    match service.register(quiz) {
        Err(QuizServiceError::Definition(DefinitionError::MissingTitle)) => {}
        other => panic!("expected definition error, got {other:?}"),
    }
}

#[test]
fn register_propagates_conflicts() {
    let (service, _) = build_service();
    service.register(sample_quiz()).expect("first registration");

    match service.register(sample_quiz()) {
        Err(QuizServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn take_requires_known_quiz() {
    let (service, repository) = build_service();

    match service.take(&QuizId::new("missing"), &sample_submission(&[])) {
        Err(QuizServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
    assert_eq!(repository.result_count(), 0);
}

#[test]
fn take_does_not_store_invalid_submissions() {
    let (service, repository) = build_service();
    service.register(sample_quiz()).expect("registered");

    match service.take(&sample_id(), &sample_submission(&[("party", "dance")])) {
        Err(QuizServiceError::Submission(SubmissionError::UnknownAnswer { .. })) => {}
        other => panic!("expected submission error, got {other:?}"),
    }
    assert_eq!(repository.result_count(), 0);
}

#[test]
fn first_taker_gets_neutral_percentiles() {
    let (service, _) = build_service();
    service.register(sample_quiz()).expect("registered");

    let record = service
        .take(
            &sample_id(),
            &sample_submission(&[
                ("party", "observe"),
                ("decisions", "facts"),
                ("conflict", "logic"),
                ("planning", "plan"),
            ]),
        )
        .expect("result recorded");

    assert!(record
        .metric_scores
        .iter()
        .all(|recorded| recorded.percentile == 50));
    let best = record.best_match.as_ref().expect("sample has archetypes");
    assert_eq!(best.archetype_id.as_str(), "logistician");
    assert_eq!(record.ranking.len(), 4);
    assert!(record.headline().starts_with("The Logistician"));
}

#[test]
fn percentiles_rank_against_earlier_results_only() {
    let (service, repository) = build_service();
    service.register(sample_quiz()).expect("registered");
    for prior in sample_prior_submissions() {
        service.take(&sample_id(), &prior).expect("prior recorded");
    }

    let record = service
        .take(&sample_id(), &sample_submission(&[("party", "deep-chat")]))
        .expect("result recorded");

    let percentile_of = |metric: &str| {
        record
            .score_for(&MetricId::new(metric))
            .map(|recorded| (recorded.score, recorded.percentile))
            .expect("metric recorded")
    };
    assert_eq!(percentile_of("extraversion"), (10.0, 25));
    assert_eq!(percentile_of("intuition"), (50.0, 25));
    assert_eq!(percentile_of("thinking"), (50.0, 25));
    assert_eq!(percentile_of("structure"), (50.0, 50));
    assert_eq!(repository.result_count(), 5);
}

#[test]
fn stored_results_can_be_fetched() {
    let (service, _) = build_service();
    service.register(sample_quiz()).expect("registered");
    let record = service
        .take(&sample_id(), &sample_submission(&[("planning", "flow")]))
        .expect("result recorded");

    let fetched = service
        .result(&sample_id(), &record.result_id)
        .expect("result present");
    assert_eq!(fetched, record);

    match service.result(&QuizId::new("other"), &record.result_id) {
        Err(QuizServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn result_ids_are_unique() {
    let (service, _) = build_service();
    service.register(sample_quiz()).expect("registered");

    let first = service
        .take(&sample_id(), &sample_submission(&[]))
        .expect("first");
    let second = service
        .take(&sample_id(), &sample_submission(&[]))
        .expect("second");

    assert_ne!(first.result_id, second.result_id);
    assert!(first.result_id.as_str().starts_with("res-"));
}

#[test]
fn repository_outages_surface_as_errors() {
    let service = QuizService::new(Arc::new(UnavailableRepository));

    match service.take(&sample_id(), &sample_submission(&[("party", "mingle")])) {
        Err(QuizServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert!(reason.contains("offline"));
        }
        other => panic!("expected unavailable, got {other:?}"),
    }

    match service.result(&sample_id(), &ResultId::new("res-000001")) {
        Err(QuizServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable, got {other:?}"),
    }
}
