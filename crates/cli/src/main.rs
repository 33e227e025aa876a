use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use model::RatingModel;
use predictor::predict_stream;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Instant;

/// star-predict - Naive star rating predictor
#[derive(Parser)]
#[command(name = "star-predict")]
#[command(
    about = "Predicts review star ratings from per-user and per-business averages",
    long_about = None
)]
struct Cli {
    /// Path to the training data (line-delimited JSON records)
    training_data: PathBuf,

    /// Path to the test data (line-delimited JSON reviews)
    test_data: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing. Predictions own stdout, so every diagnostic
    // goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();

    // Pass one: consume the whole training stream into the two lookup
    // tables. The predictor only ever sees the finished model.
    let rating_model = RatingModel::load_from_file(&cli.training_data)
        .with_context(|| format!("Failed to build model from {}", cli.training_data.display()))?;

    // Pass two: stream predictions to stdout as they are computed
    let test_file = File::open(&cli.test_data)
        .with_context(|| format!("Failed to open test data {}", cli.test_data.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = predict_stream(BufReader::new(test_file), &rating_model, &mut out)
        .context("Prediction pass failed")?;

    eprintln!(
        "{} {} predictions written, {} records skipped in {:?}",
        "✓".green(),
        summary.predicted,
        summary.skipped,
        start.elapsed()
    );

    Ok(())
}
