//! Screen navigation
//!
//! The app moves strictly forward: Welcome → Questionnaire → Score. The
//! questionnaire answers travel to the Score screen by value. Going back is
//! plain back-stack popping with no flow-specific logic.

use crate::error::MentorError;
use crate::questionnaire::QuestionnaireForm;
use crate::scoring::score;
use crate::types::{QuestionnaireResponse, ScoreResult};
use std::fmt;

/// A screen and the state it owns
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Welcome,
    Questionnaire(QuestionnaireForm),
    Score(QuestionnaireResponse),
}

/// Payload-free screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Welcome,
    Questionnaire,
    Score,
}

impl ScreenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Welcome => "welcome",
            ScreenKind::Questionnaire => "questionnaire",
            ScreenKind::Score => "score",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Welcome => ScreenKind::Welcome,
            Screen::Questionnaire(_) => ScreenKind::Questionnaire,
            Screen::Score(_) => ScreenKind::Score,
        }
    }
}

/// Push/pop stack of screens with a root that cannot be popped
#[derive(Debug, Clone)]
pub struct NavigationStack<T> {
    entries: Vec<T>,
}

impl<T> NavigationStack<T> {
    pub fn new(root: T) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Pop the top entry; the root stays put and `None` is returned
    pub fn pop(&mut self) -> Option<T> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> &T {
        // never empty: the root is never popped
        &self.entries[self.entries.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut T {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

/// Drives the Welcome → Questionnaire → Score flow
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: NavigationStack<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the Welcome screen
    pub fn new() -> Self {
        Self {
            stack: NavigationStack::new(Screen::Welcome),
        }
    }

    pub fn current(&self) -> &Screen {
        self.stack.top()
    }

    pub fn current_kind(&self) -> ScreenKind {
        self.current().kind()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Welcome → Questionnaire, with a fresh form at its defaults
    pub fn get_started(&mut self) -> Result<&mut QuestionnaireForm, MentorError> {
        self.expect(ScreenKind::Welcome, "get started")?;
        self.stack.push(Screen::Questionnaire(QuestionnaireForm::new()));
        tracing::debug!(from = "welcome", to = "questionnaire", "navigated");
        self.form_mut()
    }

    /// The form on the active Questionnaire screen
    pub fn form_mut(&mut self) -> Result<&mut QuestionnaireForm, MentorError> {
        let from = self.current_kind();
        match self.stack.top_mut() {
            Screen::Questionnaire(form) => Ok(form),
            _ => Err(MentorError::InvalidTransition {
                from: from.to_string(),
                action: "edit answers".to_string(),
            }),
        }
    }

    /// Questionnaire → Score, carrying a frozen copy of the answers
    pub fn submit(&mut self) -> Result<QuestionnaireResponse, MentorError> {
        let snapshot = match self.current() {
            Screen::Questionnaire(form) => form.snapshot(),
            other => {
                return Err(MentorError::InvalidTransition {
                    from: other.kind().to_string(),
                    action: "submit".to_string(),
                })
            }
        };

        self.stack.push(Screen::Score(snapshot));
        tracing::debug!(
            from = "questionnaire",
            to = "score",
            sleep_hours = snapshot.sleep_hours(),
            stress_level = snapshot.stress_level(),
            mood_rating = snapshot.mood_rating(),
            physical_activity = snapshot.physical_activity(),
            "navigated"
        );
        Ok(snapshot)
    }

    /// Result for the Score screen, recomputed from its snapshot
    pub fn score(&self) -> Result<ScoreResult, MentorError> {
        match self.current() {
            Screen::Score(response) => Ok(score(response)),
            other => Err(MentorError::InvalidTransition {
                from: other.kind().to_string(),
                action: "show a score".to_string(),
            }),
        }
    }

    /// Pop back one screen. Returns the new current screen kind, or `None`
    /// when already at Welcome.
    pub fn back(&mut self) -> Option<ScreenKind> {
        let popped = self.stack.pop()?;
        let to = self.current_kind();
        tracing::debug!(from = popped.kind().as_str(), to = to.as_str(), "navigated back");
        Some(to)
    }

    fn expect(&self, kind: ScreenKind, action: &str) -> Result<(), MentorError> {
        let from = self.current_kind();
        if from == kind {
            Ok(())
        } else {
            Err(MentorError::InvalidTransition {
                from: from.to_string(),
                action: action.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreCategory;

    #[test]
    fn test_starts_on_welcome() {
        let nav = Navigator::new();
        assert_eq!(nav.current_kind(), ScreenKind::Welcome);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_forward_flow() {
        let mut nav = Navigator::new();

        let form = nav.get_started().unwrap();
        assert_eq!(*form, QuestionnaireForm::new());
        form.set_sleep_hours(12.0).unwrap();
        form.set_stress_level(1.0).unwrap();
        form.set_mood_rating(10.0).unwrap();
        form.set_physical_activity(true);
        assert_eq!(nav.current_kind(), ScreenKind::Questionnaire);

        let snapshot = nav.submit().unwrap();
        assert_eq!(nav.current_kind(), ScreenKind::Score);
        assert_eq!(nav.current(), &Screen::Score(snapshot));

        let result = nav.score().unwrap();
        assert_eq!(result.total_score, 100);
        assert_eq!(result.category, ScoreCategory::Thriving);
    }

    #[test]
    fn test_illegal_transitions_leave_state_unchanged() {
        let mut nav = Navigator::new();
        assert!(matches!(
            nav.submit(),
            Err(MentorError::InvalidTransition { .. })
        ));
        assert!(nav.form_mut().is_err());
        assert!(nav.score().is_err());
        assert_eq!(nav.current_kind(), ScreenKind::Welcome);

        nav.get_started().unwrap();
        assert!(nav.get_started().is_err());
        assert_eq!(nav.depth(), 2);

        nav.submit().unwrap();
        assert!(nav.submit().is_err());
        assert!(nav.get_started().is_err());
        assert!(nav.form_mut().is_err());
        assert_eq!(nav.current_kind(), ScreenKind::Score);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_invalid_transition_message() {
        let mut nav = Navigator::new();
        let err = nav.submit().unwrap_err();
        assert_eq!(err.to_string(), "Cannot submit from the welcome screen");
    }

    #[test]
    fn test_back_keeps_form_edits_but_not_the_snapshot() {
        let mut nav = Navigator::new();
        nav.get_started().unwrap().set_sleep_hours(3.0).unwrap();
        let first = nav.submit().unwrap();

        assert_eq!(nav.back(), Some(ScreenKind::Questionnaire));
        let form = nav.form_mut().unwrap();
        assert_eq!(form.snapshot().sleep_hours(), 3.0);

        form.set_sleep_hours(9.0).unwrap();
        assert_eq!(first.sleep_hours(), 3.0);

        let second = nav.submit().unwrap();
        assert_eq!(second.sleep_hours(), 9.0);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_back_to_welcome_discards_form() {
        let mut nav = Navigator::new();
        nav.get_started().unwrap().set_mood_rating(9.0).unwrap();

        assert_eq!(nav.back(), Some(ScreenKind::Welcome));
        assert_eq!(nav.back(), None);

        let form = nav.get_started().unwrap();
        assert_eq!(*form, QuestionnaireForm::new());
    }

    #[test]
    fn test_stack_root_is_never_popped() {
        let mut stack = NavigationStack::new(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), None);
        assert_eq!(*stack.top(), 1);
        *stack.top_mut() = 5;
        assert_eq!(*stack.top(), 5);
    }
}
