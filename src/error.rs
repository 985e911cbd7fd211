//! Error types for Mindful Mentor

use thiserror::Error;

/// Errors that can occur while collecting answers, navigating, or encoding.
///
/// Scoring itself never fails: a `QuestionnaireResponse` is in range by
/// construction, so every variant here belongs to the edges of the system.
#[derive(Debug, Error)]
pub enum MentorError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f64 },

    #[error("Unknown question dimension: {0}")]
    UnknownDimension(String),

    #[error("Cannot {action} from the {from} screen")]
    InvalidTransition { from: String, action: String },

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before the questionnaire was completed")]
    InputClosed,
}
