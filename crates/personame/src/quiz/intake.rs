use std::collections::{HashMap, HashSet};

use super::definition::QuizDefinition;
use super::domain::{AnswerId, AnsweredOption, Question, QuestionId, QuizSubmission};

/// Validation errors raised while resolving a submission against its quiz.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("question {0} does not belong to this quiz")]
    UnknownQuestion(QuestionId),
    #[error("answer {answer_id} is not an option for question {question_id}")]
    UnknownAnswer {
        question_id: QuestionId,
        answer_id: AnswerId,
    },
    #[error("question {0} was answered more than once")]
    DuplicateResponse(QuestionId),
}

/// Resolves `(question, answer)` pairs into the weights the scoring core consumes.
///
/// Questions left unanswered simply contribute nothing.
pub struct SubmissionGuard<'a> {
    questions: HashMap<&'a QuestionId, &'a Question>,
}

impl<'a> SubmissionGuard<'a> {
    pub fn new(definition: &'a QuizDefinition) -> Self {
        let questions = definition
            .questions
            .iter()
            .map(|question| (&question.id, question))
            .collect();
        Self { questions }
    }

    pub fn answered_options(
        &self,
        submission: &QuizSubmission,
    ) -> Result<Vec<AnsweredOption>, SubmissionError> {
        let mut answered = Vec::with_capacity(submission.responses.len());
        let mut seen = HashSet::new();

        for response in &submission.responses {
            let question = self
                .questions
                .get(&response.question_id)
                .ok_or_else(|| SubmissionError::UnknownQuestion(response.question_id.clone()))?;

            if !seen.insert(&response.question_id) {
                return Err(SubmissionError::DuplicateResponse(
                    response.question_id.clone(),
                ));
            }

            let option = question
                .answers
                .iter()
                .find(|answer| answer.id == response.answer_id)
                .ok_or_else(|| SubmissionError::UnknownAnswer {
                    question_id: response.question_id.clone(),
                    answer_id: response.answer_id.clone(),
                })?;

            answered.push(AnsweredOption::from(option));
        }

        Ok(answered)
    }
}
