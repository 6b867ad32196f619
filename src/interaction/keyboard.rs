use serde::{Deserialize, Serialize};

use crate::core::{snap_to_precision, whole_step_is_on_grid};

/// Keys the rating reacts to, named after DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingKey {
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    Home,
    End,
    Other,
}

impl RatingKey {
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn is_handled(self) -> bool {
        self != Self::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: RatingKey,
    pub shift: bool,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: RatingKey) -> Self {
        Self { key, shift: false }
    }

    #[must_use]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    #[must_use]
    pub fn from_key_name(name: &str, shift: bool) -> Self {
        Self {
            key: RatingKey::from_key_name(name),
            shift,
        }
    }

    /// Arrow step: a whole symbol with shift held, one precision step otherwise.
    #[must_use]
    pub fn step(self, precision: f64) -> f64 {
        if self.shift { 1.0 } else { precision }
    }

    /// Applies this key to `value`, or `None` when the key is not a rating command.
    ///
    /// Arrow results are snapped back onto the precision grid. A shifted step
    /// is left as is when a whole symbol is not a multiple of `precision`.
    #[must_use]
    pub fn apply(self, value: f64, max: f64, precision: f64) -> Option<f64> {
        let step = self.step(precision);
        let snap = |stepped: f64| {
            if !self.shift || whole_step_is_on_grid(precision) {
                snap_to_precision(stepped, precision)
            } else {
                stepped
            }
        };
        match self.key {
            RatingKey::ArrowDown | RatingKey::ArrowLeft => Some(snap(value - step).max(0.0)),
            RatingKey::ArrowUp | RatingKey::ArrowRight => Some(snap(value + step).min(max)),
            RatingKey::Home => Some(0.0),
            RatingKey::End => Some(max),
            RatingKey::Other => None,
        }
    }
}
