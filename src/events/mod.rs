//! Change notifications emitted by a rating control.
//!
//! Listeners observe events synchronously, before the input handler that
//! produced them returns, and can read the settled state from the context.

use serde::{Deserialize, Serialize};

use crate::interaction::RatingState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverPhase {
    Start,
    Move,
    End,
}

impl HoverPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Move => "move",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RatingEvent {
    /// The committed value changed. Read the new value from the context.
    ValueChanged,
    Hover { phase: HoverPhase, value: f64 },
}

impl RatingEvent {
    #[must_use]
    pub fn hover(phase: HoverPhase, value: f64) -> Self {
        Self::Hover { phase, value }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ValueChanged => "rating-change",
            Self::Hover { .. } => "rating-hover",
        }
    }
}

/// Read-only view of the control passed along with every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingContext {
    pub value: f64,
    pub hover_value: f64,
    pub is_hovering: bool,
    pub max: u32,
    pub precision: f64,
}

impl RatingContext {
    #[must_use]
    pub fn new(state: RatingState, max: u32, precision: f64) -> Self {
        Self {
            value: state.value(),
            hover_value: state.hover_value(),
            is_hovering: state.is_hovering(),
            max,
            precision,
        }
    }
}

/// Observer hook for rating notifications.
pub trait RatingListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: RatingEvent, context: RatingContext);
}
