use serde::{Deserialize, Serialize};

fn default_max() -> u32 {
    5
}

fn default_precision() -> f64 {
    1.0
}

/// Host-facing configuration of a rating control.
///
/// Serializable with per-field defaults so hosts can persist partial setups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Accessible name of the slider.
    #[serde(default)]
    pub label: String,
    /// Accessible name of each glyph; empty keeps glyphs decorative.
    #[serde(default)]
    pub symbol_label: String,
    #[serde(default)]
    pub value: f64,
    /// Number of symbols.
    #[serde(default = "default_max")]
    pub max: u32,
    /// Grid step for pointer input and arrow keys, e.g. `0.5` for half symbols.
    #[serde(default = "default_precision")]
    pub precision: f64,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            symbol_label: String::new(),
            value: 0.0,
            max: default_max(),
            precision: default_precision(),
            readonly: false,
            disabled: false,
        }
    }
}

impl RatingConfig {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_symbol_label(mut self, label: impl Into<String>) -> Self {
        self.symbol_label = label.into();
        self
    }

    /// Sets the initial committed value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether user input may change the value.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.readonly
    }
}
