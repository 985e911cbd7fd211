//! Questionnaire catalog and form state
//!
//! The catalog describes the four question cards. The form is the mutable
//! state owned by the Questionnaire screen while it is on screen; it is
//! copied into a [`QuestionnaireResponse`] when the user asks for a score.

use crate::controls::{Slider, SliderSpec, Toggle, MOOD_RATING, SLEEP_HOURS, STRESS_LEVEL};
use crate::error::MentorError;
use crate::types::{Dimension, QuestionnaireResponse};
use serde::Serialize;

/// Input control used by a question card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    Slider(SliderSpec),
    Toggle { default: bool },
}

/// A question card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub dimension: Dimension,
    pub title: &'static str,
    pub prompt: &'static str,
    pub control: ControlKind,
}

/// The four questions in display order
pub const QUESTIONS: [Question; 4] = [
    Question {
        dimension: Dimension::Sleep,
        title: "1. Sleep Quality",
        prompt: "How many hours of quality sleep did you get last night?",
        control: ControlKind::Slider(SLEEP_HOURS),
    },
    Question {
        dimension: Dimension::Stress,
        title: "2. Work Stress Level",
        prompt: "On a scale from 1 (not stressed) to 10 (extremely stressed), how stressed did you feel at work today?",
        control: ControlKind::Slider(STRESS_LEVEL),
    },
    Question {
        dimension: Dimension::Mood,
        title: "3. Overall Mood",
        prompt: "How would you rate your overall mood today on a scale of 1 (very low) to 10 (very high)?",
        control: ControlKind::Slider(MOOD_RATING),
    },
    Question {
        dimension: Dimension::Activity,
        title: "4. Physical Activity",
        prompt: "Did you engage in at least 30 minutes of moderate physical activity today?",
        control: ControlKind::Toggle { default: false },
    },
];

/// Look up the card for a dimension
pub fn question(dimension: Dimension) -> &'static Question {
    &QUESTIONS[dimension.index()]
}

/// Live answers on the Questionnaire screen
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireForm {
    sleep: Slider,
    stress: Slider,
    mood: Slider,
    activity: Toggle,
}

impl Default for QuestionnaireForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireForm {
    /// A form with every control at its default
    pub fn new() -> Self {
        Self {
            sleep: Slider::new(SLEEP_HOURS),
            stress: Slider::new(STRESS_LEVEL),
            mood: Slider::new(MOOD_RATING),
            activity: Toggle::default(),
        }
    }

    pub fn set_sleep_hours(&mut self, hours: f64) -> Result<f64, MentorError> {
        self.sleep.set(hours)
    }

    pub fn set_stress_level(&mut self, level: f64) -> Result<f64, MentorError> {
        self.stress.set(level)
    }

    pub fn set_mood_rating(&mut self, rating: f64) -> Result<f64, MentorError> {
        self.mood.set(rating)
    }

    pub fn set_physical_activity(&mut self, active: bool) {
        self.activity.set(active);
    }

    pub fn toggle_physical_activity(&mut self) -> bool {
        self.activity.toggle()
    }

    /// Set any answer from a number.
    ///
    /// Sliders clamp and snap; the activity toggle is on for any non-zero
    /// value. Returns the value the control settled on.
    pub fn set_answer(&mut self, dimension: Dimension, value: f64) -> Result<f64, MentorError> {
        match dimension {
            Dimension::Sleep => self.set_sleep_hours(value),
            Dimension::Stress => self.set_stress_level(value),
            Dimension::Mood => self.set_mood_rating(value),
            Dimension::Activity => {
                if value.is_nan() {
                    return Err(MentorError::InvalidValue {
                        field: "physical_activity".to_string(),
                        value,
                    });
                }
                self.set_physical_activity(value != 0.0);
                Ok(if self.activity.is_on() { 1.0 } else { 0.0 })
            }
        }
    }

    /// Move a slider by whole steps; flips the toggle for any non-zero step count
    pub fn adjust(&mut self, dimension: Dimension, steps: i32) -> f64 {
        match dimension {
            Dimension::Sleep => self.sleep.nudge(steps),
            Dimension::Stress => self.stress.nudge(steps),
            Dimension::Mood => self.mood.nudge(steps),
            Dimension::Activity => {
                if steps != 0 {
                    self.activity.toggle();
                }
                self.answer(Dimension::Activity)
            }
        }
    }

    /// Current answer as a number (activity is 0 or 1)
    pub fn answer(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Sleep => self.sleep.value(),
            Dimension::Stress => self.stress.value(),
            Dimension::Mood => self.mood.value(),
            Dimension::Activity => {
                if self.activity.is_on() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Put every control back to its default
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Freeze the current answers.
    ///
    /// The snapshot is an independent copy; editing the form afterwards does
    /// not change it.
    pub fn snapshot(&self) -> QuestionnaireResponse {
        // every control already holds a constrained value
        QuestionnaireResponse::from_constrained(
            self.sleep.value(),
            self.stress.value(),
            self.mood.value(),
            self.activity.is_on(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order_matches_dimensions() {
        for (question, dimension) in QUESTIONS.iter().zip(Dimension::ALL) {
            assert_eq!(question.dimension, dimension);
        }
        assert_eq!(question(Dimension::Mood).title, "3. Overall Mood");
    }

    #[test]
    fn test_catalog_serializes_controls() {
        let value = serde_json::to_value(question(Dimension::Sleep)).unwrap();
        assert_eq!(value["control"]["kind"], "slider");
        assert_eq!(value["control"]["max"], 12.0);

        let value = serde_json::to_value(question(Dimension::Activity)).unwrap();
        assert_eq!(value["control"]["kind"], "toggle");
    }

    #[test]
    fn test_new_form_snapshot_is_default_response() {
        assert_eq!(
            QuestionnaireForm::new().snapshot(),
            QuestionnaireResponse::default()
        );
    }

    #[test]
    fn test_setters_clamp() {
        let mut form = QuestionnaireForm::new();
        assert_eq!(form.set_sleep_hours(13.0).unwrap(), 12.0);
        assert_eq!(form.set_stress_level(0.0).unwrap(), 1.0);
        assert_eq!(form.set_mood_rating(7.7).unwrap(), 8.0);

        let snapshot = form.snapshot();
        assert_eq!(snapshot.sleep_hours(), 12.0);
        assert_eq!(snapshot.stress_level(), 1.0);
        assert_eq!(snapshot.mood_rating(), 8.0);
    }

    #[test]
    fn test_set_answer_for_activity() {
        let mut form = QuestionnaireForm::new();
        assert_eq!(form.set_answer(Dimension::Activity, 1.0).unwrap(), 1.0);
        assert!(form.snapshot().physical_activity());
        assert_eq!(form.set_answer(Dimension::Activity, 0.0).unwrap(), 0.0);
        assert!(!form.snapshot().physical_activity());
        assert!(form.set_answer(Dimension::Activity, f64::NAN).is_err());
    }

    #[test]
    fn test_adjust() {
        let mut form = QuestionnaireForm::new();
        assert_eq!(form.adjust(Dimension::Sleep, 2), 9.0);
        assert_eq!(form.adjust(Dimension::Mood, -10), 1.0);
        assert_eq!(form.adjust(Dimension::Activity, 1), 1.0);
        assert_eq!(form.adjust(Dimension::Activity, 0), 1.0);
        assert_eq!(form.answer(Dimension::Stress), 5.0);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut form = QuestionnaireForm::new();
        form.set_sleep_hours(4.0).unwrap();
        let frozen = form.snapshot();

        form.set_sleep_hours(10.0).unwrap();
        form.toggle_physical_activity();

        assert_eq!(frozen.sleep_hours(), 4.0);
        assert!(!frozen.physical_activity());
    }

    #[test]
    fn test_snapshot_carries_edge_values() {
        let mut form = QuestionnaireForm::new();
        form.set_sleep_hours(0.0).unwrap();
        form.set_stress_level(10.0).unwrap();
        form.set_mood_rating(1.0).unwrap();
        form.set_physical_activity(true);

        assert_eq!(
            form.snapshot(),
            QuestionnaireResponse::new(0.0, 10.0, 1.0, true).unwrap()
        );
        assert_ne!(form.snapshot(), QuestionnaireResponse::default());
    }

    #[test]
    fn test_reset() {
        let mut form = QuestionnaireForm::new();
        form.set_mood_rating(2.0).unwrap();
        form.set_physical_activity(true);
        form.reset();
        assert_eq!(form, QuestionnaireForm::new());
    }
}
