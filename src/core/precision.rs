/// Snaps `value` up to the next point of the `precision` grid.
///
/// Ceiling, not nearest: touching any part of a symbol selects it. `precision`
/// must be positive; callers validate it before it reaches this function.
#[must_use]
pub fn round_to_precision(value: f64, precision: f64) -> f64 {
    let multiplier = 1.0 / precision;
    (value * multiplier).ceil() / multiplier
}

/// Snaps `value` to the nearest point of the `precision` grid.
///
/// Keyboard steps accumulate float error (`0.1 + 0.2`); snapping keeps them on
/// the same representation the pointer path produces.
#[must_use]
pub fn snap_to_precision(value: f64, precision: f64) -> f64 {
    let multiplier = 1.0 / precision;
    (value * multiplier).round() / multiplier
}

/// Whether a whole-symbol step lands back on the `precision` grid.
#[must_use]
pub fn whole_step_is_on_grid(precision: f64) -> bool {
    let multiplier = 1.0 / precision;
    (multiplier - multiplier.round()).abs() <= 1e-9
}
