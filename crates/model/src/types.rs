//! Core domain types for the rating model.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - Classified training records (the shape of a line is resolved once at parse time)
//! - Review records awaiting a prediction
//! - The RatingModel holding the per-user and per-business average tables

use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// Training Records
// =============================================================================

/// One classified line of training data.
///
/// The training stream mixes review-shaped records with user and business
/// average records; the shape is decided once when the line is parsed rather
/// than re-inspecting optional fields downstream.
///
/// When a record carries both a `user_id` and a `business_id`, the user
/// classification wins.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingRecord {
    /// The line carried a non-null `review_id`. Review records appear in
    /// the training stream but carry no averaging signal, so the builder
    /// skips them.
    Review,

    /// A known per-user average rating.
    UserAverage { user_id: String, average_stars: f64 },

    /// A known per-business average rating.
    BusinessAverage { business_id: String, stars: f64 },

    /// The line had neither a `user_id` nor a `business_id`. The builder
    /// logs a diagnostic and moves on.
    Unattributed,
}

// =============================================================================
// Review Records
// =============================================================================

/// A review awaiting a star prediction.
///
/// All fields are optional at the wire level; a record missing its
/// `review_id`, `user_id` or `business_id` is skipped with a diagnostic
/// rather than failing the run. JSON `null` and an absent field are
/// equivalent, both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRecord {
    pub review_id: Option<String>,
    pub user_id: Option<String>,
    pub business_id: Option<String>,
}

// =============================================================================
// RatingModel - The Trained Lookup Tables
// =============================================================================

/// The trained model: two average-rating tables keyed by entity ID.
///
/// Built once by a full pass over the training stream, read-only afterward.
/// Lookups return `Option<f64>` so an unknown entity is "not found", never
/// an error; the predictor's fallback ladder decides what to do with it.
#[derive(Debug, PartialEq)]
pub struct RatingModel {
    pub(crate) user_averages: HashMap<String, f64>,
    pub(crate) business_averages: HashMap<String, f64>,
}

impl RatingModel {
    /// Creates a new, empty RatingModel
    pub fn new() -> Self {
        Self {
            user_averages: HashMap::new(),
            business_averages: HashMap::new(),
        }
    }

    // Getters - lookups borrow the model; values are Copy so they are
    // returned by value

    /// Get the known average rating for a user
    pub fn user_average(&self, user_id: &str) -> Option<f64> {
        self.user_averages.get(user_id).copied()
    }

    /// Get the known average rating for a business
    pub fn business_average(&self, business_id: &str) -> Option<f64> {
        self.business_averages.get(business_id).copied()
    }

    // Mutators - only used while the builder is consuming the training
    // stream

    /// Record a user's average rating.
    ///
    /// A later record for the same user silently overwrites the earlier
    /// one (each entity is assumed to appear once in the training data).
    pub fn insert_user_average(&mut self, user_id: String, average_stars: f64) {
        self.user_averages.insert(user_id, average_stars);
    }

    /// Record a business's average rating. Last write wins, as above.
    pub fn insert_business_average(&mut self, business_id: String, stars: f64) {
        self.business_averages.insert(business_id, stars);
    }

    /// Get table sizes for logging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.user_averages.len(), self.business_averages.len())
    }
}

// Implement Default trait for convenience
impl Default for RatingModel {
    fn default() -> Self {
        Self::new()
    }
}
