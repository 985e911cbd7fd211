//! Recommendation generation
//!
//! One recommendation per dimension, chosen by a threshold on the raw
//! answer rather than on the derived sub-score.

use crate::types::{Dimension, QuestionnaireResponse, Recommendation, RecommendationTone};

/// Sleep hours at or above which sleep is praised
pub const SLEEP_GOAL_HOURS: f64 = 7.0;

/// Stress levels at or below this are considered well managed
pub const STRESS_CEILING: f64 = 5.0;

/// Mood ratings at or above this are praised
pub const MOOD_GOAL: f64 = 7.0;

/// Recommendations for a response in display order: sleep, stress, mood, activity
pub fn recommend(response: &QuestionnaireResponse) -> [Recommendation; 4] {
    Dimension::ALL.map(|dimension| recommendation_for(response, dimension))
}

/// Recommendation for a single dimension
pub fn recommendation_for(response: &QuestionnaireResponse, dimension: Dimension) -> Recommendation {
    let tone = tone_for(response, dimension);
    Recommendation {
        dimension,
        tone,
        text: message(dimension, tone).to_string(),
    }
}

/// Whether the answer for `dimension` earns praise or a nudge
pub fn tone_for(response: &QuestionnaireResponse, dimension: Dimension) -> RecommendationTone {
    let positive = match dimension {
        Dimension::Sleep => response.sleep_hours() >= SLEEP_GOAL_HOURS,
        Dimension::Stress => response.stress_level() <= STRESS_CEILING,
        Dimension::Mood => response.mood_rating() >= MOOD_GOAL,
        Dimension::Activity => response.physical_activity(),
    };

    if positive {
        RecommendationTone::Positive
    } else {
        RecommendationTone::Improvement
    }
}

/// Fixed copy for each dimension and tone
pub fn message(dimension: Dimension, tone: RecommendationTone) -> &'static str {
    use RecommendationTone::{Improvement, Positive};

    match (dimension, tone) {
        (Dimension::Sleep, Positive) => "Great sleep habits! Keep it up!",
        (Dimension::Sleep, Improvement) => "Aim for 7+ hours of quality sleep",
        (Dimension::Stress, Positive) => "Good stress management!",
        (Dimension::Stress, Improvement) => "Try meditation or short breaks",
        (Dimension::Mood, Positive) => "Excellent mood levels!",
        (Dimension::Mood, Improvement) => "Try mood-boosting activities",
        (Dimension::Activity, Positive) => "Great job staying active!",
        (Dimension::Activity, Improvement) => "Add 30 mins of daily activity",
    }
}
