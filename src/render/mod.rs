mod accessibility;
mod frame;
mod null_surface;
mod symbol;

pub use accessibility::{BaseAccessibility, RatingClass};
pub use frame::RatingFrame;
pub use null_surface::NullSurface;
pub use symbol::{SymbolFrame, SymbolVariant};

use crate::core::BoundingBox;
use crate::error::RatingResult;

/// Host-side collaborator that lays out, focuses and draws a rating control.
///
/// The control never caches geometry: `bounding_box` is queried on every
/// pointer or touch input.
pub trait RatingSurface {
    fn bounding_box(&self) -> BoundingBox;
    fn focus(&mut self);
    fn blur(&mut self);
    fn render(&mut self, frame: &RatingFrame) -> RatingResult<()>;
}
