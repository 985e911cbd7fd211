//! Input controls
//!
//! The questionnaire collects its answers through two kinds of control: a
//! stepped slider over a closed range and a boolean toggle. Both hold a value
//! that is valid at all times; anything handed to them from outside is
//! clamped into range and snapped onto the step grid, the way a platform
//! slider would refuse to rest between ticks.

use crate::error::MentorError;
use serde::Serialize;

/// Range, step and default of a slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    /// Field name used in error messages
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Hours of quality sleep last night (0-12)
pub const SLEEP_HOURS: SliderSpec = SliderSpec {
    field: "sleep_hours",
    min: 0.0,
    max: 12.0,
    step: 1.0,
    default: 7.0,
};

/// Work stress, 1 (not stressed) to 10 (extremely stressed)
pub const STRESS_LEVEL: SliderSpec = SliderSpec {
    field: "stress_level",
    min: 1.0,
    max: 10.0,
    step: 1.0,
    default: 5.0,
};

/// Overall mood, 1 (very low) to 10 (very high)
pub const MOOD_RATING: SliderSpec = SliderSpec {
    field: "mood_rating",
    min: 1.0,
    max: 10.0,
    step: 1.0,
    default: 5.0,
};

impl SliderSpec {
    /// Bring a value into the slider's domain.
    ///
    /// Finite values are clamped to `[min, max]` and snapped to the nearest
    /// `min + k * step`. NaN and infinities are rejected.
    pub fn constrain(&self, value: f64) -> Result<f64, MentorError> {
        if !value.is_finite() {
            return Err(MentorError::InvalidValue {
                field: self.field.to_string(),
                value,
            });
        }

        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        Ok((self.min + steps * self.step).clamp(self.min, self.max))
    }

    /// Whether a value already sits on the slider's grid
    pub fn contains(&self, value: f64) -> bool {
        matches!(self.constrain(value), Ok(v) if v == value)
    }

    /// Number of positions the slider can rest on
    pub fn positions(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }
}

/// A stepped slider whose value always satisfies its spec
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    spec: SliderSpec,
    value: f64,
}

impl Slider {
    /// Create a slider resting at the spec's default
    pub fn new(spec: SliderSpec) -> Self {
        Self {
            spec,
            value: spec.default,
        }
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move the slider to `value`, clamping and snapping it.
    ///
    /// Returns the value the slider actually settled on.
    pub fn set(&mut self, value: f64) -> Result<f64, MentorError> {
        self.value = self.spec.constrain(value)?;
        Ok(self.value)
    }

    /// Move by a number of steps, saturating at either end
    pub fn nudge(&mut self, steps: i32) -> f64 {
        let target = self.value + f64::from(steps) * self.spec.step;
        // target is finite for any finite spec
        self.value = self.spec.constrain(target).unwrap_or(self.value);
        self.value
    }

    pub fn increment(&mut self) -> f64 {
        self.nudge(1)
    }

    pub fn decrement(&mut self) -> f64 {
        self.nudge(-1)
    }

    pub fn reset(&mut self) {
        self.value = self.spec.default;
    }
}

/// A yes/no switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }

    /// Flip the switch, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}
