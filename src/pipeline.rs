//! Pipeline orchestration
//!
//! This module provides the public API for Mindful Mentor.
//! It wires the questionnaire, scoring and report encoding together, either
//! as a one-shot call over JSON or as a stateful session that walks the
//! three screens.

use crate::encoder::ReportEncoder;
use crate::error::MentorError;
use crate::navigation::{Navigator, ScreenKind};
use crate::types::{Dimension, QuestionnaireResponse, ScoreResult};

/// Convert questionnaire answers JSON into a score report JSON.
///
/// # Arguments
/// * `response_json` - Object with `sleep_hours`, `stress_level`,
///   `mood_rating` and `physical_activity`; missing fields take the form
///   defaults and out-of-range values are clamped
///
/// # Returns
/// Pretty-printed score report JSON
///
/// # Example
/// ```ignore
/// let report = questionnaire_to_report(
///     r#"{"sleep_hours": 8, "stress_level": 3, "mood_rating": 7, "physical_activity": true}"#
///         .to_string(),
/// )?;
/// ```
pub fn questionnaire_to_report(response_json: String) -> Result<String, MentorError> {
    // Stage 1: Parse and constrain the answers
    let response: QuestionnaireResponse = serde_json::from_str(&response_json)?;

    // Stage 2: Score and encode
    let encoder = ReportEncoder::new();
    encoder.encode_to_json(&response)
}

/// Stateful session over the three-screen flow.
///
/// Use this when a host UI owns the screens and only forwards user actions.
pub struct MentorSession {
    navigator: Navigator,
    encoder: ReportEncoder,
}

impl Default for MentorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MentorSession {
    /// Create a new session on the Welcome screen
    pub fn new() -> Self {
        Self {
            navigator: Navigator::new(),
            encoder: ReportEncoder::new(),
        }
    }

    /// Create a session whose reports carry a fixed instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            navigator: Navigator::new(),
            encoder: ReportEncoder::with_instance_id(instance_id),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> ScreenKind {
        self.navigator.current_kind()
    }

    /// Name of the active screen: "welcome", "questionnaire" or "score"
    pub fn screen_name(&self) -> &'static str {
        self.screen().as_str()
    }

    /// Leave the Welcome screen
    pub fn get_started(&mut self) -> Result<(), MentorError> {
        self.navigator.get_started().map(|_| ())
    }

    /// Answer one question; returns the value the control settled on
    pub fn set_answer(&mut self, dimension: Dimension, value: f64) -> Result<f64, MentorError> {
        self.navigator.form_mut()?.set_answer(dimension, value)
    }

    /// Submit the questionnaire and return the score report JSON
    pub fn submit(&mut self) -> Result<String, MentorError> {
        let response = self.navigator.submit()?;
        self.encoder.encode_to_json(&response)
    }

    /// Score currently on display
    pub fn score(&self) -> Result<ScoreResult, MentorError> {
        self.navigator.score()
    }

    pub fn back(&mut self) -> Option<ScreenKind> {
        self.navigator.back()
    }
}
