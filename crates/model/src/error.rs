//! Error types for the model crate.

use thiserror::Error;

/// Errors that can occur while parsing records or building the model.
///
/// Only whole-run failures live here. A record missing its `user_id`,
/// `business_id` or `review_id` is handled locally with a diagnostic and
/// a skip, never through this enum.
#[derive(Error, Debug)]
pub enum ModelError {
    /// I/O error while reading an input stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not valid JSON.
    ///
    /// There is no per-line recovery for this class: a malformed line is
    /// fatal for the whole pass, in contrast to missing-field handling.
    #[error("invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A classified record was missing its rating value field
    /// (`average_stars` for a user record, `stars` for a business record)
    #[error("record on line {line} is missing the `{field}` field")]
    MissingField { field: &'static str, line: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
