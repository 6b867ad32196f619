use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolVariant {
    Inactive,
    Active,
    Hovered,
}

/// Draw state of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolFrame {
    pub index: u32,
    pub variant: SymbolVariant,
    /// Covered fraction in `[0, 1]`, measured from the left edge.
    pub fill: f64,
}

impl SymbolFrame {
    /// Builds the frame for symbol `index` given the value being displayed.
    #[must_use]
    pub fn at(index: u32, display_value: f64, is_hovering: bool) -> Self {
        let position = f64::from(index);
        let fill = if display_value > position + 1.0 {
            1.0
        } else {
            (display_value - position).clamp(0.0, 1.0)
        };
        let variant = if is_hovering && display_value.ceil() == position + 1.0 {
            SymbolVariant::Hovered
        } else if fill > 0.0 {
            SymbolVariant::Active
        } else {
            SymbolVariant::Inactive
        };
        Self {
            index,
            variant,
            fill,
        }
    }

    /// Right inset for `clip-path: inset(0 N% 0 0)` style hosts.
    #[must_use]
    pub fn clip_inset_right_percent(self) -> f64 {
        100.0 - self.fill * 100.0
    }
}
