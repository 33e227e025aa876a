//! RatingModel building logic.
//!
//! This module consumes the training stream exactly once and populates
//! the two average tables. The model is only handed out fully built;
//! nothing observes a partial table.

use crate::error::Result;
use crate::parser;
use crate::types::{RatingModel, TrainingRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

impl RatingModel {
    /// Build the model from an iterator of raw training lines.
    ///
    /// This is the main entry point for training.
    ///
    /// Steps per line:
    /// 1. Parse and classify the line (malformed JSON aborts the build)
    /// 2. Skip review-shaped records
    /// 3. Record user and business averages, last write wins
    /// 4. Log a diagnostic for records with neither ID and continue
    ///
    /// # Arguments
    /// * `lines` - Any iterator of `io::Result<String>`, one JSON record
    ///   per item
    pub fn build_from_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut model = RatingModel::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line?;

            match parser::parse_training_line(&line, idx + 1)? {
                // Reviews carry no averaging signal in the training stream
                TrainingRecord::Review => continue,
                TrainingRecord::UserAverage {
                    user_id,
                    average_stars,
                } => model.insert_user_average(user_id, average_stars),
                TrainingRecord::BusinessAverage { business_id, stars } => {
                    model.insert_business_average(business_id, stars)
                }
                TrainingRecord::Unattributed => {
                    warn!("Record has neither a business_id nor a user_id: {}", line);
                }
            }
        }

        let (users, businesses) = model.counts();
        info!(
            "Built model with {} user averages and {} business averages",
            users, businesses
        );

        Ok(model)
    }

    /// Build the model from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::build_from_lines(reader.lines())
    }

    /// Build the model from a file of line-delimited JSON.
    ///
    /// The file handle is scoped to this call and released when it
    /// returns, whether the build succeeded or not.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
