//! Wellness scoring
//!
//! Maps a frozen questionnaire response to a 0-100 score. Each dimension
//! contributes an integer sub-score that is truncated on its own before the
//! four are summed, so the total can sit a point or two below what a single
//! final rounding would give. Only the sum is capped.

use crate::recommendations::recommend;
use crate::types::{QuestionnaireResponse, ScoreCategory, ScoreResult, SubScores};

/// Points a dimension contributes at its reference value
pub const POINTS_PER_DIMENSION: f64 = 25.0;

/// Sleep hours that earn the full sleep sub-score
pub const SLEEP_REFERENCE_HOURS: f64 = 7.0;

/// Upper bound of the total score
pub const MAX_TOTAL_SCORE: i32 = 100;

/// Compute the sub-scores for a response.
///
/// ```text
/// sleep    = trunc(sleep_hours / 7 * 25)
/// stress   = trunc((10 - stress_level) / 9 * 25)
/// mood     = trunc(mood_rating / 10 * 25)
/// activity = 25 if active else 0
/// ```
pub fn sub_scores(response: &QuestionnaireResponse) -> SubScores {
    SubScores {
        sleep: truncate((response.sleep_hours() / SLEEP_REFERENCE_HOURS) * POINTS_PER_DIMENSION),
        stress: truncate(((10.0 - response.stress_level()) / 9.0) * POINTS_PER_DIMENSION),
        mood: truncate((response.mood_rating() / 10.0) * POINTS_PER_DIMENSION),
        activity: if response.physical_activity() {
            POINTS_PER_DIMENSION as i32
        } else {
            0
        },
    }
}

/// Sum the sub-scores and cap at 100
pub fn total_score(sub_scores: &SubScores) -> u8 {
    sub_scores.raw_sum().clamp(0, MAX_TOTAL_SCORE) as u8
}

/// Score a response: sub-scores, capped total, category and recommendations.
///
/// Pure and total; the same response always yields the same result.
pub fn score(response: &QuestionnaireResponse) -> ScoreResult {
    let sub_scores = sub_scores(response);
    let total_score = total_score(&sub_scores);
    let category = ScoreCategory::from_total(total_score);

    tracing::debug!(
        sleep = sub_scores.sleep,
        stress = sub_scores.stress,
        mood = sub_scores.mood,
        activity = sub_scores.activity,
        total = total_score,
        category = category.as_str(),
        "scored questionnaire response"
    );

    ScoreResult {
        sub_scores,
        total_score,
        category,
        recommendations: recommend(response),
    }
}

// `as` truncates toward zero, which is floor for the non-negative terms here
fn truncate(value: f64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimension, RecommendationTone};
    use pretty_assertions::assert_eq;

    fn response(sleep: f64, stress: f64, mood: f64, active: bool) -> QuestionnaireResponse {
        QuestionnaireResponse::new(sleep, stress, mood, active).unwrap()
    }

    #[test]
    fn test_default_answers() {
        // 7h sleep, stress 5, mood 5, inactive
        let result = score(&QuestionnaireResponse::default());

        assert_eq!(
            result.sub_scores,
            SubScores {
                sleep: 25,
                stress: 13,
                mood: 12,
                activity: 0,
            }
        );
        assert_eq!(result.total_score, 50);
        assert_eq!(result.category, ScoreCategory::LetsImprove);
    }

    #[test]
    fn test_best_answers_are_capped() {
        let result = score(&response(12.0, 1.0, 10.0, true));

        assert_eq!(
            result.sub_scores,
            SubScores {
                sleep: 42,
                stress: 25,
                mood: 25,
                activity: 25,
            }
        );
        assert_eq!(result.sub_scores.raw_sum(), 117);
        assert_eq!(result.total_score, 100);
        assert_eq!(result.category, ScoreCategory::Thriving);
    }

    #[test]
    fn test_worst_answers() {
        let result = score(&response(0.0, 10.0, 1.0, false));

        assert_eq!(result.sub_scores.sleep, 0);
        assert_eq!(result.sub_scores.stress, 0);
        // mood 1 is the floor of its range but still earns trunc(2.5) = 2
        assert_eq!(result.sub_scores.mood, 2);
        assert_eq!(result.sub_scores.activity, 0);
        assert_eq!(result.total_score, 2);
        assert_eq!(result.category, ScoreCategory::LetsImprove);
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.tone == RecommendationTone::Improvement));
    }

    #[test]
    fn test_sleep_term_is_not_capped_at_25() {
        let scores = sub_scores(&response(12.0, 10.0, 1.0, false));
        assert_eq!(scores.sleep, 42);

        let scores = sub_scores(&response(8.0, 10.0, 1.0, false));
        assert_eq!(scores.sleep, 28);
    }

    #[test]
    fn test_terms_truncate_before_summing() {
        // 6h: 21.43 -> 21, stress 4: 16.67 -> 16, mood 5: 12.5 -> 12
        let result = score(&response(6.0, 4.0, 5.0, true));
        assert_eq!(result.sub_scores.sleep, 21);
        assert_eq!(result.sub_scores.stress, 16);
        assert_eq!(result.sub_scores.mood, 12);
        assert_eq!(result.total_score, 74);
        // a single rounding of 21.43 + 16.67 + 12.5 + 25 would give 76
        assert_eq!(result.category, ScoreCategory::GoodJob);
    }

    #[test]
    fn test_stress_floor_is_one() {
        assert_eq!(sub_scores(&response(7.0, 1.0, 5.0, false)).stress, 25);
        assert_eq!(sub_scores(&response(7.0, 10.0, 5.0, false)).stress, 0);
    }

    #[test]
    fn test_activity_is_all_or_nothing() {
        assert_eq!(sub_scores(&response(7.0, 5.0, 5.0, true)).activity, 25);
        assert_eq!(sub_scores(&response(7.0, 5.0, 5.0, false)).activity, 0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let input = response(9.0, 3.0, 8.0, true);
        assert_eq!(score(&input), score(&input));
    }

    #[test]
    fn test_recommendations_follow_dimension_order() {
        let [sleep, stress, mood, activity] = score(&response(8.0, 7.0, 9.0, false)).recommendations;

        assert_eq!(sleep.dimension, Dimension::Sleep);
        assert_eq!(sleep.tone, RecommendationTone::Positive);
        assert_eq!(stress.dimension, Dimension::Stress);
        assert_eq!(stress.tone, RecommendationTone::Improvement);
        assert_eq!(mood.dimension, Dimension::Mood);
        assert_eq!(mood.tone, RecommendationTone::Positive);
        assert_eq!(activity.dimension, Dimension::Activity);
        assert_eq!(activity.tone, RecommendationTone::Improvement);
    }

    #[test]
    fn test_result_serializes_four_recommendations() {
        let value = serde_json::to_value(score(&QuestionnaireResponse::default())).unwrap();
        assert_eq!(value["total_score"], 50);
        assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_progress_matches_total() {
        let result = score(&QuestionnaireResponse::default());
        assert!((result.progress() - 0.5).abs() < f64::EPSILON);
    }
}
