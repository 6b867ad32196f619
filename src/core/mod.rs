pub mod geometry;
pub mod precision;
pub mod range;
pub mod types;

pub use geometry::{rating_from_coordinate, value_from_coordinate};
pub use precision::{round_to_precision, snap_to_precision, whole_step_is_on_grid};
pub use range::{ensure_between, normalize_negative_zero};
pub use types::BoundingBox;
