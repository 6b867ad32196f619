use tracing::debug;

use crate::error::RatingResult;
use crate::render::RatingSurface;

use super::config_validation::{validate_config, validate_max, validate_precision};
use super::{RatingConfig, RatingControl};

impl<S: RatingSurface> RatingControl<S> {
    /// Current configuration, with `value` reflecting the committed value.
    #[must_use]
    pub fn config(&self) -> RatingConfig {
        RatingConfig {
            value: self.state.value(),
            ..self.config.clone()
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.config.label = label.into();
    }

    pub fn set_symbol_label(&mut self, label: impl Into<String>) {
        self.config.symbol_label = label.into();
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.config.max
    }

    pub(super) fn max_value(&self) -> f64 {
        f64::from(self.config.max)
    }

    /// Changes the symbol count, re-clamping value and hover value.
    ///
    /// A hover value cut down by the new bound is reported as a `move`.
    pub fn set_max(&mut self, max: u32) -> RatingResult<()> {
        let max = validate_max(max)?;
        let before = self.state.watch();
        self.config.max = max;
        self.state.clamp_to(f64::from(max));
        self.flush_hover_changes(before);
        Ok(())
    }

    #[must_use]
    pub fn precision(&self) -> f64 {
        self.config.precision
    }

    pub fn set_precision(&mut self, precision: f64) -> RatingResult<()> {
        self.config.precision = validate_precision(precision)?;
        Ok(())
    }

    #[must_use]
    pub fn readonly(&self) -> bool {
        self.config.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.config.readonly = readonly;
        self.stop_tracking_if_inert();
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.stop_tracking_if_inert();
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.config.is_interactive()
    }

    /// Replaces the whole configuration. Nothing changes if validation fails.
    pub fn set_config(&mut self, config: RatingConfig) -> RatingResult<()> {
        validate_config(&config)?;
        let value = config.value;
        let max = config.max;
        self.config.label = config.label;
        self.config.symbol_label = config.symbol_label;
        self.config.precision = config.precision;
        self.set_max(max)?;
        self.set_readonly(config.readonly);
        self.set_disabled(config.disabled);
        self.assign_value(value);
        Ok(())
    }

    /// Writes the committed value the way a host property assignment does:
    /// clamped to `[0, max]`, without toggle semantics or notifications.
    pub fn assign_value(&mut self, value: f64) {
        self.state.assign(value, self.max_value());
        self.config.value = self.state.value();
    }

    fn stop_tracking_if_inert(&mut self) {
        if self.is_interactive() {
            return;
        }
        self.tracking = None;
        if self.state.is_hovering() {
            debug!("rating became inert while hovering; ending hover");
            let before = self.state.watch();
            self.state.end_hover();
            self.flush_hover_changes(before);
        }
    }
}
