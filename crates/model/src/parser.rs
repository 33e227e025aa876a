//! Parser for line-delimited JSON records.
//!
//! Each input line is one JSON object. Training lines are classified into
//! a [`TrainingRecord`] here, once, so downstream code matches on a tagged
//! variant instead of poking at optional fields. Review lines parse
//! directly into [`ReviewRecord`].
//!
//! Line numbers are 1-based and only used for error context.

use crate::error::{ModelError, Result};
use crate::types::{ReviewRecord, TrainingRecord};
use serde::Deserialize;

/// Every field a training line may carry. Unknown fields are ignored;
/// `null` and an absent field both deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawTrainingRecord {
    review_id: Option<String>,
    user_id: Option<String>,
    business_id: Option<String>,
    average_stars: Option<f64>,
    stars: Option<f64>,
}

/// Parse one training line and resolve its shape.
///
/// # Returns
/// * `Ok(TrainingRecord)` - the classified record
/// * `Err(ModelError::Json)` - the line was not valid JSON (fatal)
/// * `Err(ModelError::MissingField)` - the record classified as a user or
///   business average but its rating value field was null/absent (fatal)
pub fn parse_training_line(line: &str, line_no: usize) -> Result<TrainingRecord> {
    let raw: RawTrainingRecord = serde_json::from_str(line).map_err(|source| ModelError::Json {
        line: line_no,
        source,
    })?;

    // A non-null review_id means this is a review mixed into the training
    // stream; there is no averaging signal on the line.
    if raw.review_id.is_some() {
        return Ok(TrainingRecord::Review);
    }

    // user_id takes priority when both IDs are present.
    if let Some(user_id) = raw.user_id {
        let average_stars = raw.average_stars.ok_or(ModelError::MissingField {
            field: "average_stars",
            line: line_no,
        })?;
        return Ok(TrainingRecord::UserAverage {
            user_id,
            average_stars,
        });
    }

    if let Some(business_id) = raw.business_id {
        let stars = raw.stars.ok_or(ModelError::MissingField {
            field: "stars",
            line: line_no,
        })?;
        return Ok(TrainingRecord::BusinessAverage { business_id, stars });
    }

    Ok(TrainingRecord::Unattributed)
}

/// Parse one review line.
///
/// Missing IDs are not an error here; the predictor decides whether the
/// record is usable.
pub fn parse_review_line(line: &str, line_no: usize) -> Result<ReviewRecord> {
    serde_json::from_str(line).map_err(|source| ModelError::Json {
        line: line_no,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_user_average() {
        let record =
            parse_training_line(r#"{"user_id":"u1","average_stars":4.5}"#, 1).unwrap();
        assert_eq!(
            record,
            TrainingRecord::UserAverage {
                user_id: "u1".to_string(),
                average_stars: 4.5,
            }
        );
    }

    #[test]
    fn test_classifies_business_average() {
        let record = parse_training_line(r#"{"business_id":"b1","stars":2.0}"#, 1).unwrap();
        assert_eq!(
            record,
            TrainingRecord::BusinessAverage {
                business_id: "b1".to_string(),
                stars: 2.0,
            }
        );
    }

    #[test]
    fn test_review_id_triggers_skip_shape() {
        let line = r#"{"review_id":"r1","user_id":"u1","business_id":"b1","stars":5.0}"#;
        let record = parse_training_line(line, 1).unwrap();
        assert_eq!(record, TrainingRecord::Review);
    }

    #[test]
    fn test_null_review_id_is_treated_as_absent() {
        let line = r#"{"review_id":null,"user_id":"u1","average_stars":3.5}"#;
        let record = parse_training_line(line, 1).unwrap();
        assert!(matches!(record, TrainingRecord::UserAverage { .. }));
    }

    #[test]
    fn test_user_id_wins_over_business_id() {
        let line = r#"{"user_id":"u1","business_id":"b1","average_stars":4.0,"stars":2.0}"#;
        let record = parse_training_line(line, 1).unwrap();
        assert_eq!(
            record,
            TrainingRecord::UserAverage {
                user_id: "u1".to_string(),
                average_stars: 4.0,
            }
        );
    }

    #[test]
    fn test_neither_id_is_unattributed() {
        let record = parse_training_line(r#"{"stars":3.0,"text":"ok"}"#, 1).unwrap();
        assert_eq!(record, TrainingRecord::Unattributed);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let line = r#"{"user_id":"u1","average_stars":4.0,"name":"Ann","review_count":12}"#;
        assert!(parse_training_line(line, 1).is_ok());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let err = parse_training_line("{not json", 7).unwrap_err();
        assert!(matches!(err, ModelError::Json { line: 7, .. }));
    }

    #[test]
    fn test_missing_value_field_is_fatal() {
        let err = parse_training_line(r#"{"user_id":"u1"}"#, 3).unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                field: "average_stars",
                line: 3,
            }
        ));

        let err = parse_training_line(r#"{"business_id":"b1","average_stars":4.0}"#, 4).unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                field: "stars",
                line: 4,
            }
        ));
    }

    #[test]
    fn test_parses_review_line() {
        let review = parse_review_line(
            r#"{"review_id":"r1","user_id":"u1","business_id":"b1"}"#,
            1,
        )
        .unwrap();
        assert_eq!(review.review_id.as_deref(), Some("r1"));
        assert_eq!(review.user_id.as_deref(), Some("u1"));
        assert_eq!(review.business_id.as_deref(), Some("b1"));
    }

    #[test]
    fn test_review_line_with_missing_ids_still_parses() {
        let review = parse_review_line(r#"{"review_id":"r1"}"#, 1).unwrap();
        assert_eq!(review.review_id.as_deref(), Some("r1"));
        assert!(review.user_id.is_none());
        assert!(review.business_id.is_none());
    }
}
