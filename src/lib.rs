//! Mindful Mentor - Wellness questionnaire scoring engine
//!
//! Mentor asks four short questions (sleep, work stress, mood, physical
//! activity), turns the answers into a 0-100 wellness score, and picks a
//! recommendation for each dimension. The flow is three screens long:
//! Welcome → Questionnaire → Score.
//!
//! ## Modules
//!
//! - **Core**: input controls, the questionnaire form, scoring and recommendations
//! - **Flow**: screen navigation and the stateful session wrapper
//! - **Surfaces**: JSON score reports, a console front-end, and C bindings

pub mod console;
pub mod controls;
pub mod encoder;
pub mod error;
pub mod navigation;
pub mod pipeline;
pub mod questionnaire;
pub mod recommendations;
pub mod scoring;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::MentorError;
pub use navigation::{Navigator, Screen, ScreenKind};
pub use pipeline::{questionnaire_to_report, MentorSession};
pub use questionnaire::QuestionnaireForm;
pub use scoring::score;
pub use types::{Dimension, QuestionnaireResponse, ScoreCategory, ScoreResult};

/// Mentor version embedded in every score report
pub const MENTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for score reports
pub const PRODUCER_NAME: &str = "mindful-mentor";
