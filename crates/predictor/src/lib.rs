//! # Predictor Crate
//!
//! This crate predicts star ratings for review records against a built
//! [`model::RatingModel`].
//!
//! ## Architecture
//! Prediction is a single sequential pass over the review stream:
//! 1. Parse each line into a ReviewRecord (malformed JSON is fatal)
//! 2. Skip records missing their review or entity IDs, with a diagnostic
//! 3. Look up the user and business averages
//! 4. Combine them with the fallback ladder (mean, single average, default 3)
//! 5. Round with the half-down rule and emit one JSON line immediately
//!
//! ## Example Usage
//! ```ignore
//! use model::RatingModel;
//! use predictor::predict_stream;
//! use std::fs::File;
//! use std::io::{self, BufReader};
//!
//! let model = RatingModel::load_from_file("training.json".as_ref())?;
//!
//! let reviews = BufReader::new(File::open("test.json")?);
//! let summary = predict_stream(reviews, &model, &mut io::stdout().lock())?;
//!
//! eprintln!("{} predicted, {} skipped", summary.predicted, summary.skipped);
//! ```

pub mod predict;
pub mod rounding;

// Re-export main types
pub use predict::{Prediction, PredictSummary, guess_stars, predict_review, predict_stream};
pub use rounding::round_half_down;
