/// Maps `-0.0` to `0.0` and leaves every other value untouched.
#[must_use]
pub fn normalize_negative_zero(value: f64) -> f64 {
    if value == 0.0 && value.is_sign_negative() {
        0.0
    } else {
        value
    }
}

/// Bounds `value` to `[min, max]` and never returns negative zero.
///
/// Non-finite input (NaN and both infinities) folds to `min` so degenerate
/// geometry can never leak into visible state.
#[must_use]
pub fn ensure_between(value: f64, min: f64, max: f64) -> f64 {
    let bounded = if !value.is_finite() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    normalize_negative_zero(bounded)
}
