use crate::core::precision::round_to_precision;
use crate::core::range::ensure_between;
use crate::core::types::BoundingBox;

/// Linearly maps a horizontal coordinate to a raw, unrounded rating.
///
/// No clamping happens here. A zero-width box yields NaN or infinity, which
/// [`ensure_between`] later folds back to zero.
#[must_use]
pub fn value_from_coordinate(coordinate: f64, bounding_box: BoundingBox, max: f64) -> f64 {
    (coordinate - bounding_box.left) / bounding_box.width * max
}

/// Full pointer pipeline: map, snap to the precision grid, clamp to `[0, max]`.
#[must_use]
pub fn rating_from_coordinate(
    coordinate: f64,
    bounding_box: BoundingBox,
    max: f64,
    precision: f64,
) -> f64 {
    let raw = value_from_coordinate(coordinate, bounding_box, max);
    ensure_between(round_to_precision(raw, precision), 0.0, max)
}
