use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    /// Moves focus to the interactive region.
    pub fn focus(&mut self) {
        self.surface.focus();
    }

    pub fn blur(&mut self) {
        self.surface.blur();
    }
}
