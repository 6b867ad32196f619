use tracing::warn;

use crate::core::rating_from_coordinate;
use crate::interaction::TrackingSource;
use crate::render::RatingSurface;

use super::RatingControl;

impl<S: RatingSurface> RatingControl<S> {
    /// Maps a horizontal client coordinate to a snapped, clamped rating.
    ///
    /// The surface is queried on every call since layout may have changed.
    #[must_use]
    pub fn rating_at(&self, coordinate: f64) -> f64 {
        let bounds = self.surface.bounding_box();
        if !bounds.is_valid() {
            warn!(
                left = bounds.left,
                width = bounds.width,
                "degenerate rating bounds; pointer maps to zero"
            );
        }
        rating_from_coordinate(
            coordinate,
            bounds,
            self.max_value(),
            self.config.precision,
        )
    }

    /// Starts hover tracking at `x`.
    pub fn pointer_enter(&mut self, x: f64) {
        if !self.is_interactive() {
            return;
        }
        self.tracking = Some(TrackingSource::Pointer);
        self.begin_hover_at(x);
    }

    /// Updates the hover preview while the pointer is tracked.
    ///
    /// After a click has suspended hovering, crossing into another symbol
    /// resumes it.
    pub fn pointer_move(&mut self, x: f64) {
        if !self.is_interactive() || self.tracking != Some(TrackingSource::Pointer) {
            return;
        }
        self.track_hover_at(x);
    }

    /// Ends hover tracking; the last hover value is kept.
    pub fn pointer_leave(&mut self) {
        if self.tracking == Some(TrackingSource::Pointer) {
            self.tracking = None;
        }
        if !self.state.is_hovering() {
            return;
        }
        let before = self.state.watch();
        self.state.end_hover();
        self.flush_hover_changes(before);
    }

    /// Click activation at `x`: commits the rating under the pointer.
    pub fn click(&mut self, x: f64) {
        if self.config.disabled {
            return;
        }
        let candidate = self.rating_at(x);
        self.set_value(candidate);
    }

    pub(super) fn begin_hover_at(&mut self, x: f64) {
        let before = self.state.watch();
        let hover_value = self.rating_at(x);
        self.state.begin_hover(hover_value);
        self.flush_hover_changes(before);
    }

    pub(super) fn track_hover_at(&mut self, x: f64) {
        let before = self.state.watch();
        let hover_value = self.rating_at(x);
        if !self.state.is_hovering() && hover_value.ceil() != before.hover_value.ceil() {
            self.state.begin_hover(hover_value);
        } else {
            self.state.track_hover(hover_value);
        }
        self.flush_hover_changes(before);
    }
}
