use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{RatingError, RatingResult};
use crate::icon::IconAccessibility;
use crate::render::{BaseAccessibility, SymbolFrame};

/// Backend-agnostic description of one rating draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingFrame {
    pub display_value: f64,
    pub is_hovering: bool,
    pub base: BaseAccessibility,
    /// Shared by every glyph; driven by `RatingConfig::symbol_label`.
    pub symbol_icon: IconAccessibility,
    pub symbols: SmallVec<[SymbolFrame; 8]>,
}

impl RatingFrame {
    pub fn validate(&self) -> RatingResult<()> {
        let max = self.base.aria_valuemax;
        if self.symbols.len() as f64 != max {
            return Err(RatingError::InvalidFrame(format!(
                "expected {max} symbols, got {}",
                self.symbols.len()
            )));
        }
        if !self.display_value.is_finite() || self.display_value < 0.0 || self.display_value > max
        {
            return Err(RatingError::InvalidFrame(format!(
                "display value {} outside [0, {max}]",
                self.display_value
            )));
        }
        for (position, symbol) in self.symbols.iter().enumerate() {
            if symbol.index as usize != position {
                return Err(RatingError::InvalidFrame(format!(
                    "symbol at position {position} carries index {}",
                    symbol.index
                )));
            }
            if !(0.0..=1.0).contains(&symbol.fill) {
                return Err(RatingError::InvalidFrame(format!(
                    "symbol {} fill {} outside [0, 1]",
                    symbol.index, symbol.fill
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn active_symbol_count(&self) -> usize {
        self.symbols.iter().filter(|symbol| symbol.fill > 0.0).count()
    }
}
