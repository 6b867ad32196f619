mod keyboard;

use serde::{Deserialize, Serialize};

use crate::core::ensure_between;

pub use keyboard::{KeyInput, RatingKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMode {
    Idle,
    Hovering,
}

/// Input device currently driving hover tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingSource {
    Pointer,
    Touch,
}

/// What the host should do with the platform event that produced an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputDisposition {
    /// The control handled the input; suppress default scroll/click behavior.
    Consumed,
    /// Let the platform apply its default behavior.
    Ignored,
}

impl InputDisposition {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// The two hover fields watched for notifications, captured before a mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverWatch {
    pub hover_value: f64,
    pub is_hovering: bool,
}

/// Mutable value model owned by exactly one control.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingState {
    value: f64,
    hover_value: f64,
    is_hovering: bool,
}

impl RatingState {
    #[must_use]
    pub fn with_value(value: f64, max: f64) -> Self {
        Self {
            value: ensure_between(value, 0.0, max),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn hover_value(self) -> f64 {
        self.hover_value
    }

    #[must_use]
    pub fn is_hovering(self) -> bool {
        self.is_hovering
    }

    #[must_use]
    pub fn mode(self) -> HoverMode {
        if self.is_hovering {
            HoverMode::Hovering
        } else {
            HoverMode::Idle
        }
    }

    #[must_use]
    pub fn watch(self) -> HoverWatch {
        HoverWatch {
            hover_value: self.hover_value,
            is_hovering: self.is_hovering,
        }
    }

    /// Value shown by the symbols: the hover preview while hovering an
    /// interactive control, otherwise the committed value.
    #[must_use]
    pub fn display_value(self, interactive: bool) -> f64 {
        if interactive && self.is_hovering {
            self.hover_value
        } else {
            self.value
        }
    }

    pub fn begin_hover(&mut self, hover_value: f64) {
        self.is_hovering = true;
        self.hover_value = hover_value;
    }

    pub fn track_hover(&mut self, hover_value: f64) {
        self.hover_value = hover_value;
    }

    /// Leaves hover mode; the hover value is kept but is stale until the next hover.
    pub fn end_hover(&mut self) {
        self.is_hovering = false;
    }

    /// Toggle commit: committing the current value clears the rating.
    pub fn commit(&mut self, new_value: f64) {
        self.value = if new_value == self.value {
            0.0
        } else {
            new_value
        };
        self.is_hovering = false;
    }

    pub fn assign(&mut self, value: f64, max: f64) {
        self.value = ensure_between(value, 0.0, max);
    }

    /// Re-applies `[0, max]` after the symbol count shrinks.
    pub fn clamp_to(&mut self, max: f64) {
        self.value = ensure_between(self.value, 0.0, max);
        self.hover_value = ensure_between(self.hover_value, 0.0, max);
    }
}
