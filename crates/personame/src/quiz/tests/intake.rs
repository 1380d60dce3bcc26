use super::common::*;
use crate::quiz::definition::DefinitionError;
use crate::quiz::domain::{AnswerId, Metric, MetricId, QuestionId};
use crate::quiz::intake::{SubmissionError, SubmissionGuard};
use crate::quiz::sample::sample_submission;

#[test]
fn guard_resolves_selected_answer_weights() {
    let quiz = sample_quiz();
    let submission = sample_submission(&[("party", "observe"), ("planning", "adapt")]);

    let answered = SubmissionGuard::new(&quiz)
        .answered_options(&submission)
        .expect("valid submission");

    assert_eq!(answered.len(), 2);
    assert_eq!(
        answered[0].weights[0].metric_id,
        MetricId::new("extraversion")
    );
    assert_eq!(answered[0].weights[0].value, -50.0);
    assert_eq!(answered[1].weights[0].value, -50.0);
}

#[test]
fn guard_rejects_unknown_question() {
    let quiz = sample_quiz();
    let submission = sample_submission(&[("favorite-color", "blue")]);

    match SubmissionGuard::new(&quiz).answered_options(&submission) {
        Err(SubmissionError::UnknownQuestion(id)) => assert_eq!(id.as_str(), "favorite-color"),
        other => panic!("expected unknown question, got {other:?}"),
    }
}

#[test]
fn guard_rejects_answer_from_another_question() {
    let quiz = sample_quiz();
    let submission = sample_submission(&[("party", "gut")]);

    match SubmissionGuard::new(&quiz).answered_options(&submission) {
        Err(SubmissionError::UnknownAnswer {
            question_id,
            answer_id,
        }) => {
            assert_eq!(question_id, QuestionId::new("party"));
            assert_eq!(answer_id, AnswerId::new("gut"));
        }
        other => panic!("expected unknown answer, got {other:?}"),
    }
}

#[test]
fn guard_rejects_duplicate_responses() {
    let quiz = sample_quiz();
    let submission = sample_submission(&[("party", "mingle"), ("party", "observe")]);

    assert_eq!(
        SubmissionGuard::new(&quiz).answered_options(&submission),
        Err(SubmissionError::DuplicateResponse(QuestionId::new("party")))
    );
}

#[test]
fn empty_submission_resolves_to_nothing() {
    let quiz = sample_quiz();

    let answered = SubmissionGuard::new(&quiz)
        .answered_options(&sample_submission(&[]))
        .expect("empty submission is allowed");

    assert!(answered.is_empty());
}

#[test]
fn sample_quiz_is_valid() {
    assert_eq!(sample_quiz().validate(), Ok(()));
}

#[test]
fn validation_rejects_blank_title() {
    let mut quiz = sample_quiz();
    quiz.title = "   ".to_string();

    assert_eq!(quiz.validate(), Err(DefinitionError::MissingTitle));
}

#[test]
fn validation_rejects_duplicate_metric_ids() {
    let mut quiz = sample_quiz();
    quiz.metrics.push(Metric::new("thinking", "Thinking again"));

    assert_eq!(
        quiz.validate(),
        Err(DefinitionError::DuplicateMetric(MetricId::new("thinking")))
    );
}

#[test]
fn validation_rejects_duplicate_answer_ids() {
    let mut quiz = sample_quiz();
    let copy = quiz.questions[1].answers[0].clone();
    quiz.questions[1].answers.push(copy);

    assert_eq!(
        quiz.validate(),
        Err(DefinitionError::DuplicateAnswer {
            question_id: QuestionId::new("decisions"),
            answer_id: AnswerId::new("facts"),
        })
    );
}

#[test]
fn validation_tolerates_loose_weights_and_targets() {
    let mut quiz = sample_quiz();
    quiz.archetypes[0].targets[0].relevance = -2.0;
    quiz.archetypes[0].targets[1].target_value = 140.0;
    quiz.questions[0].answers[0].weights[0].metric_id = MetricId::new("unknown");

    assert_eq!(quiz.validate(), Ok(()));
}
