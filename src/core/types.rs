use serde::{Deserialize, Serialize};

/// Horizontal extent of the control's interactive region, in host pixels.
///
/// Supplied by the surface at interaction time and never cached by the
/// control, since layout can change between two pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub width: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Whether coordinates can be mapped linearly across this box.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}
