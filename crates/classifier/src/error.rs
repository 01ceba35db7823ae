//! Classifier error types.

use thiserror::Error;

/// Errors that can occur while classifying measurements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// Height is zero or negative, so BMI is undefined.
    #[error("Invalid height: {height} (must be greater than 0)")]
    InvalidHeight { height: f64 },

    /// A measurement is NaN or infinite.
    #[error("Non-finite value for {field}")]
    NonFiniteInput { field: &'static str },

    /// Text does not name a known risk level.
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
