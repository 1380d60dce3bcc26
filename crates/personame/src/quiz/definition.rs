use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerId, Archetype, ArchetypeId, Metric, MetricId, Question, QuestionId, QuizId};

/// A complete quiz as authored by its creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub id: QuizId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Structural problems that make a definition unusable.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("quiz title must not be empty")]
    MissingTitle,
    #[error("metric id {0} is declared more than once")]
    DuplicateMetric(MetricId),
    #[error("archetype id {0} is declared more than once")]
    DuplicateArchetype(ArchetypeId),
    #[error("question id {0} is declared more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {question_id} declares answer {answer_id} more than once")]
    DuplicateAnswer {
        question_id: QuestionId,
        answer_id: AnswerId,
    },
}

impl QuizDefinition {
    /// Check identity constraints only.
    ///
    /// Weights and targets are left alone: unknown metric references, negative relevance,
    /// and out-of-range targets are tolerated by the scoring core.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.title.trim().is_empty() {
            return Err(DefinitionError::MissingTitle);
        }

        first_duplicate(self.metrics.iter().map(|metric| &metric.id))
            .map_or(Ok(()), |id| Err(DefinitionError::DuplicateMetric(id.clone())))?;
        first_duplicate(self.archetypes.iter().map(|archetype| &archetype.id))
            .map_or(Ok(()), |id| Err(DefinitionError::DuplicateArchetype(id.clone())))?;
        first_duplicate(self.questions.iter().map(|question| &question.id))
            .map_or(Ok(()), |id| Err(DefinitionError::DuplicateQuestion(id.clone())))?;

        for question in &self.questions {
            if let Some(answer_id) = first_duplicate(question.answers.iter().map(|a| &a.id)) {
                return Err(DefinitionError::DuplicateAnswer {
                    question_id: question.id.clone(),
                    answer_id: answer_id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }
}

fn first_duplicate<'a, T, I>(ids: I) -> Option<&'a T>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
