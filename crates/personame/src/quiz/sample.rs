use super::definition::QuizDefinition;
use super::domain::{
    AnswerId, AnswerOption, Archetype, ArchetypeMetricTarget, Metric, Question, QuestionId,
    QuestionResponse, QuizId, QuizSubmission, Weight,
};

pub const SAMPLE_QUIZ_ID: &str = "personality-type";

fn metric(id: &str, name: &str, description: &str, min_label: &str, max_label: &str) -> Metric {
    Metric {
        description: Some(description.to_string()),
        min_label: Some(min_label.to_string()),
        max_label: Some(max_label.to_string()),
        ..Metric::new(id, name)
    }
}

fn archetype(
    id: &str,
    name: &str,
    description: &str,
    emoji: &str,
    color: &str,
    targets: &[(&str, f64, f64)],
) -> Archetype {
    Archetype {
        description: Some(description.to_string()),
        emoji: Some(emoji.to_string()),
        color: Some(color.to_string()),
        ..Archetype::new(
            id,
            name,
            targets
                .iter()
                .map(|(metric_id, target, relevance)| {
                    ArchetypeMetricTarget::new(*metric_id, *target, *relevance)
                })
                .collect(),
        )
    }
}

/// Single-metric multiple-choice question, as every sample question is.
fn question(id: &str, text: &str, metric_id: &str, answers: &[(&str, &str, f64)]) -> Question {
    Question {
        id: QuestionId::new(id),
        text: text.to_string(),
        answers: answers
            .iter()
            .map(|(answer_id, answer_text, weight)| AnswerOption {
                id: AnswerId::new(*answer_id),
                text: answer_text.to_string(),
                weights: vec![Weight::new(metric_id, *weight)],
            })
            .collect(),
    }
}

impl QuizDefinition {
    /// Four-dimension personality quiz used for demos and startup seeding.
    pub fn sample() -> Self {
        Self {
            id: QuizId::new(SAMPLE_QUIZ_ID),
            title: "Personality Type Quiz".to_string(),
            description: Some(
                "Discover your personality type based on four key dimensions.".to_string(),
            ),
            metrics: vec![
                metric(
                    "extraversion",
                    "Extraversion",
                    "How outgoing and sociable you are",
                    "Introvert",
                    "Extrovert",
                ),
                metric(
                    "intuition",
                    "Intuition",
                    "How much you trust intuition vs. concrete facts",
                    "Sensing",
                    "Intuitive",
                ),
                metric(
                    "thinking",
                    "Thinking",
                    "Whether you prioritize logic or harmony",
                    "Feeling",
                    "Thinking",
                ),
                metric(
                    "structure",
                    "Structure",
                    "How much you like planning vs. spontaneity",
                    "Perceiving",
                    "Judging",
                ),
            ],
            archetypes: vec![
                archetype(
                    "advocate",
                    "The Advocate",
                    "Idealistic and principled, driven by values and a passion for making the world better.",
                    "🌟",
                    "#a855f7",
                    &[
                        ("intuition", 80.0, 1.0),
                        ("thinking", 20.0, 0.9),
                        ("extraversion", 70.0, 0.7),
                        ("structure", 75.0, 0.6),
                    ],
                ),
                archetype(
                    "logistician",
                    "The Logistician",
                    "Practical and fact-oriented, excellent at organization and reliable execution.",
                    "⚙️",
                    "#5568ff",
                    &[
                        ("intuition", 20.0, 0.9),
                        ("thinking", 75.0, 1.0),
                        ("extraversion", 30.0, 0.7),
                        ("structure", 85.0, 0.9),
                    ],
                ),
                archetype(
                    "entertainer",
                    "The Entertainer",
                    "Spontaneous and charismatic, bringing energy and enthusiasm to any situation.",
                    "🎭",
                    "#f91880",
                    &[
                        ("extraversion", 85.0, 1.0),
                        ("intuition", 60.0, 0.8),
                        ("thinking", 40.0, 0.7),
                        ("structure", 25.0, 0.9),
                    ],
                ),
                archetype(
                    "architect",
                    "The Architect",
                    "Analytical and strategic, seeing the bigger picture and planning ahead.",
                    "🏗️",
                    "#06b6d4",
                    &[
                        ("intuition", 85.0, 1.0),
                        ("thinking", 80.0, 0.9),
                        ("extraversion", 40.0, 0.6),
                        ("structure", 65.0, 0.7),
                    ],
                ),
            ],
            questions: vec![
                question(
                    "party",
                    "At a party, you typically:",
                    "extraversion",
                    &[
                        ("mingle", "Mingle with lots of people", 50.0),
                        ("deep-chat", "Chat deeply with a few people", -40.0),
                        ("observe", "Observe from the sidelines", -50.0),
                    ],
                ),
                question(
                    "decisions",
                    "When making decisions, you rely more on:",
                    "intuition",
                    &[
                        ("facts", "Facts and data", -40.0),
                        ("gut", "Gut feelings and patterns", 40.0),
                        ("both", "Both equally", 0.0),
                    ],
                ),
                question(
                    "conflict",
                    "In conflict, you are more likely to:",
                    "thinking",
                    &[
                        ("logic", "Focus on logical analysis of the problem", 45.0),
                        ("feelings", "Consider how everyone feels", -45.0),
                        ("compromise", "Try to find a compromise", 0.0),
                    ],
                ),
                question(
                    "planning",
                    "You prefer to:",
                    "structure",
                    &[
                        ("plan", "Have a detailed plan before starting", 50.0),
                        ("adapt", "Adapt as you go", -50.0),
                        ("flow", "Go with the flow but stay organized", 0.0),
                    ],
                ),
            ],
        }
    }
}

/// Build a submission for the sample quiz from `(question, answer)` pairs.
pub fn sample_submission(choices: &[(&str, &str)]) -> QuizSubmission {
    QuizSubmission {
        responses: choices
            .iter()
            .map(|(question_id, answer_id)| QuestionResponse::new(*question_id, *answer_id))
            .collect(),
    }
}

/// Earlier takers of the sample quiz, giving percentiles a population to rank against.
pub fn sample_prior_submissions() -> Vec<QuizSubmission> {
    vec![
        sample_submission(&[
            ("party", "mingle"),
            ("decisions", "gut"),
            ("conflict", "feelings"),
            ("planning", "flow"),
        ]),
        sample_submission(&[
            ("party", "observe"),
            ("decisions", "facts"),
            ("conflict", "logic"),
            ("planning", "plan"),
        ]),
        sample_submission(&[
            ("party", "deep-chat"),
            ("decisions", "both"),
            ("conflict", "compromise"),
            ("planning", "adapt"),
        ]),
        sample_submission(&[
            ("party", "mingle"),
            ("decisions", "both"),
            ("conflict", "logic"),
            ("planning", "adapt"),
        ]),
    ]
}
