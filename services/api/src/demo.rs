use std::sync::Arc;

use clap::Args;
use ecofit::coach::{
    Answers, CategoryResolver, CoachTables, Dimension, FootprintEvaluator, QuizView,
    ScoreResult, ThreadRngPicker,
};
use ecofit::config::CoachConfig;
use ecofit::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Product name, description, or URL fragment
    pub(crate) text: String,
    /// Number of items to price
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) quantity: u32,
}

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// How you usually commute (e.g. "Car", "Bicycle")
    #[arg(long)]
    pub(crate) transport: String,
    /// What you usually shop for (e.g. "Groceries & Food")
    #[arg(long)]
    pub(crate) shopping: String,
    /// How often you buy new electronics (e.g. "Rarely")
    #[arg(long)]
    pub(crate) electronics_freq: String,
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let tables = Arc::new(CoachTables::standard());
    let resolver = CategoryResolver::new(tables.clone());
    let evaluator = FootprintEvaluator::new(tables, CoachConfig::default());

    let found = resolver.resolve(&args.text);
    match &found {
        Some(found) => println!(
            "'{}' -> {} (keyword '{}', score {:.1})",
            args.text, found.category, found.keyword, found.score
        ),
        None => println!("'{}' -> no category above the match threshold", args.text),
    }

    if let Some(product) = evaluator.lookup_product(found.as_ref(), args.quantity) {
        println!(
            "\nEstimated footprint for {} item(s): {} kg CO₂",
            product.quantity, product.carbon_score
        );
        for alternative in &product.alternatives {
            println!(
                "- {}: {} kg CO₂ ({})",
                alternative.name, alternative.carbon_score, alternative.reason
            );
        }
    }

    Ok(())
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let tables = Arc::new(CoachTables::standard());
    let evaluator = FootprintEvaluator::new(tables, CoachConfig::default());

    let answers = Answers::from([
        (Dimension::Transport, args.transport),
        (Dimension::Shopping, args.shopping),
        (Dimension::ElectronicsFrequency, args.electronics_freq),
    ]);
    let result = evaluator.evaluate(&answers, &ThreadRngPicker)?;
    render_score(&result);

    Ok(())
}

pub(crate) fn run_quiz() -> Result<(), AppError> {
    let quiz = QuizView::from_emissions(&CoachTables::standard().emissions);

    println!("{}", quiz.intro);
    for question in &quiz.questions {
        println!("\n{} (--{})", question.text, question.id.key().replace('_', "-"));
        for option in &question.options {
            println!("- {option}");
        }
    }
    println!("\n{}", quiz.note);

    Ok(())
}

fn render_score(result: &ScoreResult) {
    println!("Carbon score: {} kg CO₂", result.carbon_score);
    println!("{}", result.praise);

    if !result.tips.is_empty() {
        println!("\nTips");
        for tip in &result.tips {
            println!("- {tip}");
        }
    }
}
