//! Streaming prediction over review lines.
//!
//! The predictor consumes review lines one at a time against a fully
//! built [`RatingModel`] and writes one JSON prediction line per valid
//! review, in input order, as soon as it is computed.

use crate::rounding::round_half_down;
use anyhow::{Context, Result};
use model::{RatingModel, ReviewRecord, parser};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Default guess when neither the user nor the business is known.
const DEFAULT_GUESS: f64 = 3.0;

/// A single predicted rating, serialized as one JSON line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub review_id: String,
    pub stars: i64,
}

/// Counters for one prediction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictSummary {
    /// Prediction lines written to the output stream
    pub predicted: u64,
    /// Review records dropped with a diagnostic (missing IDs)
    pub skipped: u64,
}

/// Combine the two averages into a raw guess.
///
/// ## Fallback ladder
/// - both known: arithmetic mean of the two
/// - only one known: that average as-is
/// - neither known: the default constant 3
pub fn guess_stars(user_average: Option<f64>, business_average: Option<f64>) -> f64 {
    match (user_average, business_average) {
        (Some(user), Some(business)) => (user + business) / 2.0,
        (Some(user), None) => user,
        (None, Some(business)) => business,
        (None, None) => DEFAULT_GUESS,
    }
}

/// Predict a single review against the model.
///
/// # Returns
/// * `Some(Prediction)` - the rounded star guess for this review
/// * `None` - the record was missing its `review_id`, `user_id` or
///   `business_id`; exactly one diagnostic is logged and no output is
///   produced for it
pub fn predict_review(review: ReviewRecord, model: &RatingModel) -> Option<Prediction> {
    let ReviewRecord {
        review_id,
        user_id,
        business_id,
    } = review;

    let review_id = match review_id {
        Some(id) => id,
        None => {
            warn!("Review record has no ID");
            return None;
        }
    };

    let (user_id, business_id) = match (user_id, business_id) {
        (Some(user_id), Some(business_id)) => (user_id, business_id),
        _ => {
            warn!("Review record {} is incomplete", review_id);
            return None;
        }
    };

    // Absent-key lookups are "not found", not errors; the fallback
    // ladder absorbs them.
    let user_average = model.user_average(&user_id);
    let business_average = model.business_average(&business_id);

    let guess = round_half_down(guess_stars(user_average, business_average));

    Some(Prediction {
        review_id,
        stars: guess as i64,
    })
}

/// Stream predictions for a whole review source.
///
/// One output line is emitted immediately per valid input line, in input
/// order. Writes are line-oriented and flushed per record so predictions
/// stream out as they are produced.
///
/// # Arguments
/// * `reviews` - Buffered reader over line-delimited JSON review records
/// * `model` - The fully built model, read-only
/// * `out` - Destination for prediction lines (stdout in production)
///
/// # Returns
/// * `Ok(PredictSummary)` - counters for the pass
/// * `Err` - a line failed to read or was not valid JSON (fatal, the
///   pass stops at that line)
pub fn predict_stream<R, W>(reviews: R, model: &RatingModel, out: &mut W) -> Result<PredictSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = PredictSummary::default();

    for (idx, line) in reviews.lines().enumerate() {
        let line = line.context("Failed to read review line")?;
        let review = parser::parse_review_line(&line, idx + 1)?;

        match predict_review(review, model) {
            Some(prediction) => {
                let encoded = serde_json::to_string(&prediction)
                    .context("Failed to serialize prediction")?;
                writeln!(out, "{}", encoded).context("Failed to write prediction")?;
                out.flush().context("Failed to flush prediction stream")?;
                summary.predicted += 1;
            }
            None => summary.skipped += 1,
        }
    }

    debug!(
        "Prediction pass finished: {} predicted, {} skipped",
        summary.predicted, summary.skipped
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(review_id: Option<&str>, user_id: Option<&str>, business_id: Option<&str>) -> ReviewRecord {
        ReviewRecord {
            review_id: review_id.map(String::from),
            user_id: user_id.map(String::from),
            business_id: business_id.map(String::from),
        }
    }

    fn test_model() -> RatingModel {
        let mut model = RatingModel::new();
        model.insert_user_average("u1".to_string(), 4.0);
        model.insert_business_average("b1".to_string(), 2.0);
        model
    }

    #[test]
    fn test_guess_uses_mean_when_both_known() {
        assert_eq!(guess_stars(Some(4.0), Some(2.0)), 3.0);
    }

    #[test]
    fn test_guess_falls_back_to_single_average() {
        assert_eq!(guess_stars(Some(4.5), None), 4.5);
        assert_eq!(guess_stars(None, Some(1.5)), 1.5);
    }

    #[test]
    fn test_guess_defaults_to_three() {
        assert_eq!(guess_stars(None, None), 3.0);
    }

    #[test]
    fn test_predicts_known_review() {
        let model = test_model();
        let prediction = predict_review(review(Some("r1"), Some("u1"), Some("b1")), &model);

        assert_eq!(
            prediction,
            Some(Prediction {
                review_id: "r1".to_string(),
                stars: 3,
            })
        );
    }

    #[test]
    fn test_unknown_entities_use_default() {
        let model = test_model();
        let prediction =
            predict_review(review(Some("r1"), Some("ghost"), Some("nowhere")), &model).unwrap();

        assert_eq!(prediction.stars, 3);
    }

    #[test]
    fn test_single_average_is_rounded_half_down() {
        let mut model = RatingModel::new();
        model.insert_user_average("u1".to_string(), 3.5);

        // Only the user average exists: guess 3.5, exact half rounds down
        let prediction =
            predict_review(review(Some("r1"), Some("u1"), Some("unknown")), &model).unwrap();

        assert_eq!(prediction.stars, 3);
    }

    #[test]
    fn test_missing_review_id_is_skipped() {
        let model = test_model();

        assert!(predict_review(review(None, Some("u1"), Some("b1")), &model).is_none());
    }

    #[test]
    fn test_missing_entity_id_is_skipped() {
        let model = test_model();

        assert!(predict_review(review(Some("r1"), None, Some("b1")), &model).is_none());
        assert!(predict_review(review(Some("r1"), Some("u1"), None), &model).is_none());
    }

    #[test]
    fn test_prediction_serializes_to_one_json_object() {
        let prediction = Prediction {
            review_id: "r1".to_string(),
            stars: 3,
        };

        assert_eq!(
            serde_json::to_string(&prediction).unwrap(),
            r#"{"review_id":"r1","stars":3}"#
        );
    }
}
