use crate::events::{RatingContext, RatingEvent};
use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    #[must_use]
    pub fn context(&self) -> RatingContext {
        RatingContext::new(self.state, self.config.max, self.config.precision)
    }

    pub(super) fn emit_event(&mut self, event: RatingEvent) {
        let context = self.context();
        for listener in self.listeners.values_mut() {
            listener.on_event(event, context);
        }
    }
}
