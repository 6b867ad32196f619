use indexmap::IndexMap;

use crate::events::RatingListener;
use crate::interaction::{RatingState, TrackingSource};
use crate::render::RatingSurface;

mod config_controller;
mod config_validation;
mod control_init;
mod focus_controller;
mod hover_watcher;
mod json_contract;
mod keyboard_controller;
mod listener_dispatch;
mod listener_registry;
mod pointer_controller;
mod rating_config;
mod rating_snapshot;
mod render_frame_builder;
mod touch_controller;
mod value_controller;

pub use json_contract::{RATING_SNAPSHOT_JSON_SCHEMA_V1, RatingSnapshotJsonContractV1};
pub use rating_config::RatingConfig;
pub use rating_snapshot::RatingSnapshot;
pub use render_frame_builder::build_rating_frame;

/// Headless star-rating control.
///
/// Owns the committed value, the hover preview and the notification
/// listeners. Input handlers run to completion: by the time one returns,
/// state has settled and every listener has observed the resulting events.
pub struct RatingControl<S: RatingSurface> {
    surface: S,
    config: RatingConfig,
    state: RatingState,
    tracking: Option<TrackingSource>,
    listeners: IndexMap<String, Box<dyn RatingListener>>,
}
