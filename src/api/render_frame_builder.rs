use smallvec::SmallVec;

use crate::error::RatingResult;
use crate::icon::RatingIcon;
use crate::interaction::RatingState;
use crate::render::{BaseAccessibility, RatingFrame, RatingSurface, SymbolFrame};

use super::{RatingConfig, RatingControl};

/// Pure projection of state and config into exactly `max` symbol frames.
#[must_use]
pub fn build_rating_frame(state: RatingState, config: &RatingConfig) -> RatingFrame {
    let display_value = state.display_value(config.is_interactive());
    let symbols: SmallVec<[SymbolFrame; 8]> = (0..config.max)
        .map(|index| SymbolFrame::at(index, display_value, state.is_hovering()))
        .collect();

    RatingFrame {
        display_value,
        is_hovering: state.is_hovering(),
        base: BaseAccessibility::new(
            &config.label,
            state.value(),
            config.max,
            config.readonly,
            config.disabled,
        ),
        symbol_icon: RatingIcon::new(config.symbol_label.as_str()).accessibility(),
        symbols,
    }
}

impl<S: RatingSurface> RatingControl<S> {
    #[must_use]
    pub fn frame(&self) -> RatingFrame {
        build_rating_frame(self.state, &self.config)
    }

    /// Builds the current frame and hands it to the surface.
    pub fn render(&mut self) -> RatingResult<()> {
        let frame = self.frame();
        self.surface.render(&frame)
    }
}
