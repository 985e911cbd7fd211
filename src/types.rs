//! Core types for Mindful Mentor
//!
//! This module defines the data that flows from the Questionnaire screen to
//! the Score screen: the frozen questionnaire answers, the per-dimension
//! sub-scores, the overall result, and the recommendations shown with it.

use crate::controls::{MOOD_RATING, SLEEP_HOURS, STRESS_LEVEL};
use crate::error::MentorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four wellness dimensions the questionnaire asks about.
///
/// The declaration order is the fixed display order everywhere: sleep,
/// stress, mood, activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Sleep,
    Stress,
    Mood,
    Activity,
}

impl Dimension {
    /// All dimensions in display order
    pub const ALL: [Dimension; 4] = [
        Dimension::Sleep,
        Dimension::Stress,
        Dimension::Mood,
        Dimension::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Sleep => "sleep",
            Dimension::Stress => "stress",
            Dimension::Mood => "mood",
            Dimension::Activity => "activity",
        }
    }

    /// Zero-based position in display order
    pub fn index(&self) -> usize {
        match self {
            Dimension::Sleep => 0,
            Dimension::Stress => 1,
            Dimension::Mood => 2,
            Dimension::Activity => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = MentorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sleep" | "sleep_hours" => Ok(Dimension::Sleep),
            "stress" | "stress_level" => Ok(Dimension::Stress),
            "mood" | "mood_rating" => Ok(Dimension::Mood),
            "activity" | "physical_activity" => Ok(Dimension::Activity),
            other => Err(MentorError::UnknownDimension(other.to_string())),
        }
    }
}

/// Answers to the questionnaire, frozen at submission time.
///
/// Every field is within its slider's domain and on its step grid. The only
/// ways to obtain one are [`Default`], [`QuestionnaireResponse::new`] (which
/// clamps and snaps), deserialization (same rules), and
/// [`crate::questionnaire::QuestionnaireForm::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionnaireResponse")]
pub struct QuestionnaireResponse {
    sleep_hours: f64,
    stress_level: f64,
    mood_rating: f64,
    physical_activity: bool,
}

impl Default for QuestionnaireResponse {
    fn default() -> Self {
        Self {
            sleep_hours: SLEEP_HOURS.default,
            stress_level: STRESS_LEVEL.default,
            mood_rating: MOOD_RATING.default,
            physical_activity: false,
        }
    }
}

impl QuestionnaireResponse {
    /// Build a response, clamping each slider value into its range.
    ///
    /// Fails only for NaN or infinite inputs.
    pub fn new(
        sleep_hours: f64,
        stress_level: f64,
        mood_rating: f64,
        physical_activity: bool,
    ) -> Result<Self, MentorError> {
        Ok(Self {
            sleep_hours: SLEEP_HOURS.constrain(sleep_hours)?,
            stress_level: STRESS_LEVEL.constrain(stress_level)?,
            mood_rating: MOOD_RATING.constrain(mood_rating)?,
            physical_activity,
        })
    }

    /// Wrap values that already satisfy their slider specs
    pub(crate) fn from_constrained(
        sleep_hours: f64,
        stress_level: f64,
        mood_rating: f64,
        physical_activity: bool,
    ) -> Self {
        debug_assert!(SLEEP_HOURS.contains(sleep_hours));
        debug_assert!(STRESS_LEVEL.contains(stress_level));
        debug_assert!(MOOD_RATING.contains(mood_rating));
        Self {
            sleep_hours,
            stress_level,
            mood_rating,
            physical_activity,
        }
    }

    /// Hours of sleep, 0-12
    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    /// Stress level, 1-10 (higher is worse)
    pub fn stress_level(&self) -> f64 {
        self.stress_level
    }

    /// Mood rating, 1-10
    pub fn mood_rating(&self) -> f64 {
        self.mood_rating
    }

    /// At least 30 minutes of moderate activity today
    pub fn physical_activity(&self) -> bool {
        self.physical_activity
    }
}

/// Unchecked wire form of [`QuestionnaireResponse`]
#[derive(Debug, Deserialize)]
struct RawQuestionnaireResponse {
    #[serde(default = "default_sleep_hours")]
    sleep_hours: f64,
    #[serde(default = "default_stress_level")]
    stress_level: f64,
    #[serde(default = "default_mood_rating")]
    mood_rating: f64,
    #[serde(default)]
    physical_activity: bool,
}

fn default_sleep_hours() -> f64 {
    SLEEP_HOURS.default
}

fn default_stress_level() -> f64 {
    STRESS_LEVEL.default
}

fn default_mood_rating() -> f64 {
    MOOD_RATING.default
}

impl TryFrom<RawQuestionnaireResponse> for QuestionnaireResponse {
    type Error = MentorError;

    fn try_from(raw: RawQuestionnaireResponse) -> Result<Self, Self::Error> {
        QuestionnaireResponse::new(
            raw.sleep_hours,
            raw.stress_level,
            raw.mood_rating,
            raw.physical_activity,
        )
    }
}

/// Qualitative band of a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// 80-100
    Thriving,
    /// 60-79
    GoodJob,
    /// 0-59
    LetsImprove,
}

impl ScoreCategory {
    /// Classify a (capped) total score
    pub fn from_total(total: u8) -> Self {
        match total {
            80..=u8::MAX => ScoreCategory::Thriving,
            60..=79 => ScoreCategory::GoodJob,
            _ => ScoreCategory::LetsImprove,
        }
    }

    /// Heading shown under the score
    pub fn title(&self) -> &'static str {
        match self {
            ScoreCategory::Thriving => "🌟 Thriving!",
            ScoreCategory::GoodJob => "💪 Good Job!",
            ScoreCategory::LetsImprove => "🚀 Let's Improve!",
        }
    }

    pub fn color(&self) -> ScoreColor {
        match self {
            ScoreCategory::Thriving => ScoreColor::Green,
            ScoreCategory::GoodJob => ScoreColor::Orange,
            ScoreCategory::LetsImprove => ScoreColor::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::Thriving => "thriving",
            ScoreCategory::GoodJob => "good_job",
            ScoreCategory::LetsImprove => "lets_improve",
        }
    }
}

/// Accent color associated with a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Orange,
    Red,
}

/// Per-dimension integer contributions to the total.
///
/// Individual terms are not capped; sleep alone reaches 42 at 12 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub sleep: i32,
    pub stress: i32,
    pub mood: i32,
    pub activity: i32,
}

impl SubScores {
    /// Sum of the four terms before the 100 cap
    pub fn raw_sum(&self) -> i32 {
        self.sleep + self.stress + self.mood + self.activity
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Sleep => self.sleep,
            Dimension::Stress => self.stress,
            Dimension::Mood => self.mood,
            Dimension::Activity => self.activity,
        }
    }
}

/// Whether a recommendation praises the answer or suggests a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTone {
    Positive,
    Improvement,
}

/// One recommendation row on the Score screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub dimension: Dimension,
    pub tone: RecommendationTone,
    pub text: String,
}

/// Score derived from a [`QuestionnaireResponse`].
///
/// Never stored; recompute it from the response whenever it is displayed.
/// Only [`crate::scoring::score`] produces one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub sub_scores: SubScores,
    /// 0-100
    pub total_score: u8,
    pub category: ScoreCategory,
    /// Sleep, stress, mood, activity
    pub recommendations: [Recommendation; 4],
}

impl ScoreResult {
    /// Fraction of the score ring to fill, 0-1
    pub fn progress(&self) -> f64 {
        f64::from(self.total_score) / 100.0
    }

    pub fn title(&self) -> &'static str {
        self.category.title()
    }

    pub fn color(&self) -> ScoreColor {
        self.category.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_response_defaults() {
        let response = QuestionnaireResponse::default();
        assert_eq!(response.sleep_hours(), 7.0);
        assert_eq!(response.stress_level(), 5.0);
        assert_eq!(response.mood_rating(), 5.0);
        assert!(!response.physical_activity());
    }

    #[test]
    fn test_response_new_clamps() {
        let response = QuestionnaireResponse::new(20.0, -4.0, 10.4, true).unwrap();
        assert_eq!(response.sleep_hours(), 12.0);
        assert_eq!(response.stress_level(), 1.0);
        assert_eq!(response.mood_rating(), 10.0);
        assert!(response.physical_activity());
    }

    #[test]
    fn test_response_new_rejects_nan() {
        assert!(QuestionnaireResponse::new(f64::NAN, 5.0, 5.0, false).is_err());
    }

    #[test]
    fn test_response_deserialize_constrains() {
        let json = r#"{"sleep_hours": 15, "stress_level": 0, "mood_rating": 6.6, "physical_activity": true}"#;
        let response: QuestionnaireResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response,
            QuestionnaireResponse::new(12.0, 1.0, 7.0, true).unwrap()
        );
    }

    #[test]
    fn test_response_deserialize_missing_fields_use_defaults() {
        let response: QuestionnaireResponse = serde_json::from_str(r#"{"mood_rating": 9}"#).unwrap();
        assert_eq!(response.sleep_hours(), 7.0);
        assert_eq!(response.stress_level(), 5.0);
        assert_eq!(response.mood_rating(), 9.0);
        assert!(!response.physical_activity());
    }

    #[test]
    fn test_response_serializes_field_names() {
        let value = serde_json::to_value(QuestionnaireResponse::default()).unwrap();
        assert_eq!(value["sleep_hours"], 7.0);
        assert_eq!(value["stress_level"], 5.0);
        assert_eq!(value["mood_rating"], 5.0);
        assert_eq!(value["physical_activity"], false);
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("Sleep".parse::<Dimension>().unwrap(), Dimension::Sleep);
        assert_eq!(" stress_level ".parse::<Dimension>().unwrap(), Dimension::Stress);
        assert_eq!("physical_activity".parse::<Dimension>().unwrap(), Dimension::Activity);
        assert!(matches!(
            "appetite".parse::<Dimension>(),
            Err(MentorError::UnknownDimension(_))
        ));
    }

    #[test]
    fn test_dimension_order() {
        for (i, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), i);
        }
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(ScoreCategory::from_total(100), ScoreCategory::Thriving);
        assert_eq!(ScoreCategory::from_total(80), ScoreCategory::Thriving);
        assert_eq!(ScoreCategory::from_total(79), ScoreCategory::GoodJob);
        assert_eq!(ScoreCategory::from_total(60), ScoreCategory::GoodJob);
        assert_eq!(ScoreCategory::from_total(59), ScoreCategory::LetsImprove);
        assert_eq!(ScoreCategory::from_total(0), ScoreCategory::LetsImprove);
    }

    #[test]
    fn test_category_presentation() {
        assert_eq!(ScoreCategory::Thriving.color(), ScoreColor::Green);
        assert_eq!(ScoreCategory::GoodJob.color(), ScoreColor::Orange);
        assert_eq!(ScoreCategory::LetsImprove.color(), ScoreColor::Red);
        assert!(ScoreCategory::LetsImprove.title().contains("Let's Improve"));
    }
}
