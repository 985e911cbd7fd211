//! Score report encoding
//!
//! This module turns a questionnaire response into a self-describing score
//! report: producer metadata, the frozen answers, the sub-scores, and what
//! the Score screen shows. Ensures all fields are present and serializable.

use crate::error::MentorError;
use crate::scoring::score;
use crate::types::{
    QuestionnaireResponse, Recommendation, ScoreCategory, ScoreColor, SubScores,
};
use crate::{MENTOR_VERSION, PRODUCER_NAME};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report producer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Everything the Score screen displays, plus provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub input: QuestionnaireResponse,
    pub sub_scores: SubScores,
    /// Sum of sub-scores before the 100 cap
    pub raw_sum: i32,
    pub total_score: u8,
    pub category: ScoreCategory,
    pub title: String,
    pub color: ScoreColor,
    pub recommendations: Vec<Recommendation>,
}

/// Report encoder
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Score a response and wrap the result in a report
    pub fn encode(&self, response: &QuestionnaireResponse) -> ScoreReport {
        let result = score(response);

        ScoreReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: MENTOR_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            input: *response,
            sub_scores: result.sub_scores,
            raw_sum: result.sub_scores.raw_sum(),
            total_score: result.total_score,
            category: result.category,
            title: result.title().to_string(),
            color: result.color(),
            recommendations: result.recommendations.to_vec(),
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(&self, response: &QuestionnaireResponse) -> Result<String, MentorError> {
        let report = self.encode(response);
        serde_json::to_string_pretty(&report).map_err(MentorError::JsonError)
    }
}
