use crate::error::{RatingError, RatingResult};

use super::RatingConfig;

pub(super) fn validate_max(max: u32) -> RatingResult<u32> {
    if max == 0 {
        return Err(RatingError::InvalidConfig(
            "max must be at least one symbol".to_owned(),
        ));
    }
    Ok(max)
}

pub(super) fn validate_precision(precision: f64) -> RatingResult<f64> {
    if !precision.is_finite() || precision <= 0.0 {
        return Err(RatingError::InvalidConfig(
            "precision must be finite and > 0".to_owned(),
        ));
    }
    Ok(precision)
}

pub(super) fn validate_config(config: &RatingConfig) -> RatingResult<()> {
    validate_max(config.max)?;
    validate_precision(config.precision)?;
    if !config.value.is_finite() {
        return Err(RatingError::InvalidConfig(
            "value must be finite".to_owned(),
        ));
    }
    Ok(())
}
