use crate::infra::{parse_answer, InMemoryQuizRepository};
use clap::Args;
use personame::error::AppError;
use personame::quiz::sample::{sample_prior_submissions, sample_submission, SAMPLE_QUIZ_ID};
use personame::quiz::{
    QuestionResponse, QuizDefinition, QuizId, QuizResultRecord, QuizService, QuizSubmission,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Selected answer as QUESTION=ANSWER; repeat for each answered question
    #[arg(long = "answer", value_name = "QUESTION=ANSWER", value_parser = parse_answer)]
    pub(crate) answers: Vec<QuestionResponse>,
    /// Print the stored result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip seeding earlier takers, so every percentile falls back to 50
    #[arg(long)]
    pub(crate) skip_population: bool,
}

type SampleService = QuizService<InMemoryQuizRepository>;

fn sample_service() -> Result<SampleService, AppError> {
    let service = QuizService::new(Arc::new(InMemoryQuizRepository::default()));
    service.register(QuizDefinition::sample())?;
    Ok(service)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, json } = args;

    let service = sample_service()?;
    let submission = QuizSubmission { responses: answers };
    let record = service.take(&QuizId::new(SAMPLE_QUIZ_ID), &submission)?;

    if json {
        match serde_json::to_string_pretty(&record) {
            Ok(payload) => println!("{}", payload),
            Err(err) => println!("Result payload unavailable: {}", err),
        }
    } else {
        render_result(&record);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = sample_service()?;
    let quiz_id = QuizId::new(SAMPLE_QUIZ_ID);
    let definition = service.definition(&quiz_id)?;

    println!("Personality quiz demo");
    println!(
        "- Quiz '{}': {} metrics | {} archetypes | {} questions",
        definition.title,
        definition.metrics.len(),
        definition.archetypes.len(),
        definition.questions.len()
    );

    if !args.skip_population {
        let priors = sample_prior_submissions();
        for prior in &priors {
            service.take(&quiz_id, prior)?;
        }
        println!("- Seeded {} earlier takers for percentile ranking", priors.len());
    }

    let submission = sample_submission(&[
        ("party", "mingle"),
        ("decisions", "gut"),
        ("conflict", "feelings"),
        ("planning", "plan"),
    ]);
    println!("\nTaker answers:");
    for response in &submission.responses {
        let text = definition
            .question(&response.question_id)
            .and_then(|question| {
                question
                    .answers
                    .iter()
                    .find(|answer| answer.id == response.answer_id)
            })
            .map(|answer| answer.text.as_str())
            .unwrap_or("?");
        println!("  - {}: {}", response.question_id, text);
    }

    let record = service.take(&quiz_id, &submission)?;
    println!();
    render_result(&record);

    let stored = service.result(&quiz_id, &record.result_id)?;
    println!(
        "\nStored result {} completed at {}",
        stored.result_id,
        stored.completed_at.to_rfc3339()
    );

    Ok(())
}

fn render_result(record: &QuizResultRecord) {
    println!("Result {}: {}", record.result_id, record.headline());
    println!("Metric scores:");
    for recorded in &record.metric_scores {
        println!(
            "  - {}: {:.1} (percentile {})",
            recorded.metric_name, recorded.score, recorded.percentile
        );
    }
    if record.ranking.is_empty() {
        return;
    }
    println!("Archetype ranking:");
    for (position, matched) in record.ranking.iter().enumerate() {
        println!(
            "  {}. {} | {:.1}% match | distance {:.2}",
            position + 1,
            matched.archetype_name,
            matched.match_score,
            matched.distance
        );
    }
}
