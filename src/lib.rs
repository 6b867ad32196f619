//! star-rating: a headless star-rating control.
//!
//! The crate owns the value and interaction model of a rating widget: mapping
//! pointer, touch and keyboard input to a rating, tracking hover previews, and
//! notifying listeners. Drawing, layout and focus are delegated to a host
//! [`render::RatingSurface`].

pub mod api;
pub mod core;
pub mod error;
pub mod events;
pub mod icon;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RatingConfig, RatingControl};
pub use error::{RatingError, RatingResult};
