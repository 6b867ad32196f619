use crate::interaction::{InputDisposition, TrackingSource};
use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    /// Begins a touch preview at `x`.
    ///
    /// Returns `Consumed` so the host prevents scrolling for this touch.
    pub fn touch_start(&mut self, x: f64) -> InputDisposition {
        if !self.is_interactive() {
            return InputDisposition::Ignored;
        }
        self.tracking = Some(TrackingSource::Touch);
        self.begin_hover_at(x);
        InputDisposition::Consumed
    }

    pub fn touch_move(&mut self, x: f64) {
        if !self.is_interactive() || self.tracking != Some(TrackingSource::Touch) {
            return;
        }
        self.track_hover_at(x);
    }

    /// Touch release commits the last previewed rating.
    ///
    /// State and notifications settle before this returns. `Consumed` tells
    /// the host to suppress the synthetic click that would activate again.
    pub fn touch_end(&mut self) -> InputDisposition {
        if self.tracking != Some(TrackingSource::Touch) {
            return InputDisposition::Ignored;
        }
        self.tracking = None;
        if !self.is_interactive() {
            return InputDisposition::Ignored;
        }
        let hover_value = self.state.hover_value();
        self.set_value(hover_value);
        InputDisposition::Consumed
    }

    /// Touch cancelled by the platform: drop the preview without committing.
    pub fn touch_cancel(&mut self) {
        if self.tracking != Some(TrackingSource::Touch) {
            return;
        }
        self.tracking = None;
        if self.state.is_hovering() {
            let before = self.state.watch();
            self.state.end_hover();
            self.flush_hover_changes(before);
        }
    }
}
