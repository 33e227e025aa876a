//! # Model Crate
//!
//! This crate builds the naive rating model from line-delimited JSON
//! training data.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TrainingRecord, ReviewRecord, RatingModel)
//! - **parser**: Parse JSON lines into classified records
//! - **builder**: One-pass model construction from a training stream
//! - **error**: Error types for parsing and building
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::RatingModel;
//! use std::path::Path;
//!
//! // One full pass over the training data builds both tables
//! let model = RatingModel::load_from_file(Path::new("training.json"))?;
//!
//! // Lookups never fail; an unknown entity is simply None
//! let user_avg = model.user_average("u1");
//! let business_avg = model.business_average("b1");
//!
//! let (users, businesses) = model.counts();
//! println!("{} user averages, {} business averages", users, businesses);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod builder;

// Re-export commonly used types for convenience
pub use error::{ModelError, Result};
pub use types::{RatingModel, ReviewRecord, TrainingRecord};
