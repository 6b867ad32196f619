use serde::{Deserialize, Serialize};

use crate::error::{RatingError, RatingResult};
use crate::interaction::RatingState;
use crate::render::{RatingFrame, RatingSurface};

use super::{RatingConfig, RatingControl};

/// Deterministic capture of a control, useful for fixtures and host persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub config: RatingConfig,
    pub state: RatingState,
    pub frame: RatingFrame,
}

impl<S: RatingSurface> RatingControl<S> {
    #[must_use]
    pub fn snapshot(&self) -> RatingSnapshot {
        RatingSnapshot {
            config: self.config(),
            state: self.state,
            frame: self.frame(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> RatingResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| RatingError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}
