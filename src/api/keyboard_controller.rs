use tracing::debug;

use crate::events::RatingEvent;
use crate::interaction::{InputDisposition, KeyInput};
use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    /// Applies a key press.
    ///
    /// Arrows, Home and End are consumed; a value-change notification
    /// follows only when the value actually moved.
    pub fn key_down(&mut self, input: KeyInput) -> InputDisposition {
        if !self.is_interactive() {
            return InputDisposition::Ignored;
        }
        let previous = self.state.value();
        let Some(next) = input.apply(previous, self.max_value(), self.config.precision) else {
            return InputDisposition::Ignored;
        };
        self.state.assign(next, self.max_value());
        let value = self.state.value();
        if value != previous {
            debug!(key = ?input.key, shift = input.shift, previous, value, "rating keyboard step");
            self.emit_event(RatingEvent::ValueChanged);
        }
        InputDisposition::Consumed
    }
}
