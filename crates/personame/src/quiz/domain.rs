use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a quiz definition.
    QuizId
);
string_id!(
    /// Identifier of a personality dimension within a quiz.
    MetricId
);
string_id!(ArchetypeId);
string_id!(QuestionId);
string_id!(AnswerId);
string_id!(
    /// Identifier of a stored quiz result.
    ResultId
);

/// One personality dimension, always scored on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Label shown at the 0 end of the scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    /// Label shown at the 100 end of the scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

impl Metric {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MetricId::new(id),
            name: name.into(),
            description: None,
            min_label: None,
            max_label: None,
        }
    }
}

/// Signed contribution of an answer option to one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub metric_id: MetricId,
    pub value: f64,
}

impl Weight {
    pub fn new(metric_id: impl Into<String>, value: f64) -> Self {
        Self {
            metric_id: MetricId::new(metric_id),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: AnswerId,
    pub text: String,
    #[serde(default)]
    pub weights: Vec<Weight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub answers: Vec<AnswerOption>,
}

/// Expected score and importance of one metric for an archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeMetricTarget {
    pub metric_id: MetricId,
    pub target_value: f64,
    /// Zero removes the metric from this archetype's distance.
    pub relevance: f64,
}

impl ArchetypeMetricTarget {
    pub fn new(metric_id: impl Into<String>, target_value: f64, relevance: f64) -> Self {
        Self {
            metric_id: MetricId::new(metric_id),
            target_value,
            relevance,
        }
    }
}

/// Named target profile over the metrics it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub targets: Vec<ArchetypeMetricTarget>,
}

impl Archetype {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        targets: Vec<ArchetypeMetricTarget>,
    ) -> Self {
        Self {
            id: ArchetypeId::new(id),
            name: name.into(),
            description: None,
            emoji: None,
            color: None,
            targets,
        }
    }
}

/// Weights of the answer a taker selected for a single question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnsweredOption {
    pub weights: Vec<Weight>,
}

impl From<&AnswerOption> for AnsweredOption {
    fn from(option: &AnswerOption) -> Self {
        Self {
            weights: option.weights.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: QuestionId,
    pub answer_id: AnswerId,
}

impl QuestionResponse {
    pub fn new(question_id: impl Into<String>, answer_id: impl Into<String>) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            answer_id: AnswerId::new(answer_id),
        }
    }
}

/// Inbound set of answers for one quiz attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub responses: Vec<QuestionResponse>,
}
