use tracing::debug;

use crate::core::ensure_between;
use crate::events::RatingEvent;
use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    #[must_use]
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    #[must_use]
    pub fn hover_value(&self) -> f64 {
        self.state.hover_value()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.state.is_hovering()
    }

    /// Commits `new_value` as a user action.
    ///
    /// Committing the current value clears the rating. Hovering always ends.
    /// `ValueChanged` goes out first when the value moved, then the hover
    /// notifications for the ended preview.
    pub fn set_value(&mut self, new_value: f64) {
        if !self.is_interactive() {
            return;
        }
        let before = self.state.watch();
        let previous = self.state.value();
        let candidate = ensure_between(new_value, 0.0, self.max_value());
        self.state.commit(candidate);

        let value = self.state.value();
        if value != previous {
            debug!(previous, value, "rating value committed");
            self.emit_event(RatingEvent::ValueChanged);
        }
        self.flush_hover_changes(before);
    }
}
