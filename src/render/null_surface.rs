use crate::core::BoundingBox;
use crate::error::RatingResult;
use crate::render::{RatingFrame, RatingSurface};

/// Headless surface used by tests and non-visual hosts.
///
/// It still validates every frame so tests catch broken symbol output.
#[derive(Debug, Clone)]
pub struct NullSurface {
    pub bounding_box: BoundingBox,
    pub focused: bool,
    pub render_count: usize,
    pub last_frame: Option<RatingFrame>,
}

impl NullSurface {
    #[must_use]
    pub fn new(bounding_box: BoundingBox) -> Self {
        Self {
            bounding_box,
            focused: false,
            render_count: 0,
            last_frame: None,
        }
    }
}

impl Default for NullSurface {
    /// A 100px-wide region starting at the origin.
    fn default() -> Self {
        Self::new(BoundingBox::new(0.0, 100.0))
    }
}

impl RatingSurface for NullSurface {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn render(&mut self, frame: &RatingFrame) -> RatingResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
