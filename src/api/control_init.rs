use indexmap::IndexMap;
use tracing::debug;

use crate::error::RatingResult;
use crate::interaction::RatingState;
use crate::render::RatingSurface;

use super::config_validation::validate_config;
use super::{RatingConfig, RatingControl};

impl<S: RatingSurface> RatingControl<S> {
    /// Creates a control bound to `surface`.
    ///
    /// This is the explicit replacement for element registration: every
    /// control is constructed by its host, nothing is registered globally.
    pub fn new(surface: S, config: RatingConfig) -> RatingResult<Self> {
        validate_config(&config)?;
        let state = RatingState::with_value(config.value, f64::from(config.max));
        debug!(
            max = config.max,
            precision = config.precision,
            value = state.value(),
            "rating control created"
        );
        Ok(Self {
            surface,
            config,
            state,
            tracking: None,
            listeners: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
