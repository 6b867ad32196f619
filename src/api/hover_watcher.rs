use crate::events::{HoverPhase, RatingEvent};
use crate::interaction::HoverWatch;
use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    /// Dirty-checks the hover fields against `before` and notifies each
    /// changed field once: hovering toggles first, then the hover value.
    pub(super) fn flush_hover_changes(&mut self, before: HoverWatch) {
        let after = self.state.watch();
        if after.is_hovering != before.is_hovering {
            let phase = if after.is_hovering {
                HoverPhase::Start
            } else {
                HoverPhase::End
            };
            self.emit_event(RatingEvent::hover(phase, after.hover_value));
        }
        if after.hover_value != before.hover_value {
            self.emit_event(RatingEvent::hover(HoverPhase::Move, after.hover_value));
        }
    }
}
