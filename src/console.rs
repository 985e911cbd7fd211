//! Line-oriented terminal front-end
//!
//! Renders the three screens as plain text and reads answers one line at a
//! time. Generic over the reader and writer so it runs against a terminal,
//! a pipe, or an in-memory buffer in tests.

use std::io::{BufRead, Write};

use crate::controls::SliderSpec;
use crate::error::MentorError;
use crate::navigation::Navigator;
use crate::questionnaire::{ControlKind, Question, QUESTIONS};
use crate::types::{RecommendationTone, ScoreResult};

pub const APP_TITLE: &str = "Mindful Mentor 🌱";
pub const APP_SUBTITLE: &str = "Your AI-powered guide to better mental well-being";

/// Interactive console session
pub struct ConsoleApp<R, W> {
    input: R,
    output: W,
    navigator: Navigator,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            navigator: Navigator::new(),
        }
    }

    /// Walk Welcome → Questionnaire → Score and return the score shown
    pub fn run(&mut self) -> Result<ScoreResult, MentorError> {
        self.welcome()?;
        self.questionnaire()?;
        let result = self.navigator.score()?;
        write!(self.output, "{}", render_score(&result))?;
        self.output.flush()?;
        Ok(result)
    }

    /// Consume the app and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn welcome(&mut self) -> Result<(), MentorError> {
        write!(self.output, "{}", render_welcome())?;
        self.output.flush()?;
        self.read_line()?;
        self.navigator.get_started()?;
        Ok(())
    }

    fn questionnaire(&mut self) -> Result<(), MentorError> {
        for question in QUESTIONS.iter() {
            write!(self.output, "{}", render_question(question))?;
            loop {
                let current = self.navigator.form_mut()?.answer(question.dimension);
                write!(self.output, "{}", render_prompt(question, current))?;
                self.output.flush()?;

                let line = self.read_line()?;
                match parse_answer(&question.control, &line) {
                    Answer::Keep => break,
                    Answer::Value(value) => {
                        let settled = self
                            .navigator
                            .form_mut()?
                            .set_answer(question.dimension, value)?;
                        if settled != value {
                            writeln!(self.output, "  Adjusted to {}", settled as i64)?;
                        }
                        break;
                    }
                    Answer::Invalid(hint) => {
                        tracing::debug!(dimension = question.dimension.as_str(), input = %line.trim(), "rejected answer");
                        writeln!(self.output, "  {}", hint)?;
                    }
                }
            }
        }

        writeln!(self.output)?;
        self.navigator.submit()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, MentorError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MentorError::InputClosed);
        }
        Ok(line)
    }
}

/// Interpretation of one line typed at a question
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Empty line: keep the current value
    Keep,
    Value(f64),
    /// Unusable input, with a hint to show
    Invalid(String),
}

/// Parse a typed answer for a control
pub fn parse_answer(control: &ControlKind, line: &str) -> Answer {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Answer::Keep;
    }

    match control {
        ControlKind::Slider(spec) => match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Answer::Value(value),
            _ => Answer::Invalid(format!(
                "Please enter a number from {} to {}",
                spec.min, spec.max
            )),
        },
        ControlKind::Toggle { .. } => match trimmed.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Answer::Value(1.0),
            "n" | "no" | "false" | "0" => Answer::Value(0.0),
            _ => Answer::Invalid("Please answer yes or no".to_string()),
        },
    }
}

pub fn render_welcome() -> String {
    format!("\n{APP_TITLE}\n{APP_SUBTITLE}\n\nPress Enter to get started ")
}

pub fn render_question(question: &Question) -> String {
    format!("\n{}\n{}\n", question.title, question.prompt)
}

fn render_prompt(question: &Question, current: f64) -> String {
    match &question.control {
        ControlKind::Slider(SliderSpec { min, max, .. }) => {
            format!("[{min}-{max}, current {}] > ", current as i64)
        }
        ControlKind::Toggle { .. } => {
            let current = if current != 0.0 { "Yes" } else { "No" };
            format!("[yes/no, current {current}] > ")
        }
    }
}

/// Score ring as a ten-cell bar
fn render_ring(progress: f64) -> String {
    let filled = (progress * 10.0).round().clamp(0.0, 10.0) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

pub fn render_score(result: &ScoreResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Your wellness score: {} {}\n{}\n\n",
        result.total_score,
        render_ring(result.progress()),
        result.title()
    ));
    for recommendation in &result.recommendations {
        let marker = match recommendation.tone {
            RecommendationTone::Positive => "+",
            RecommendationTone::Improvement => "*",
        };
        out.push_str(&format!(
            "  {marker} {:<8} {}\n",
            recommendation.dimension.as_str(),
            recommendation.text
        ));
    }
    out
}
