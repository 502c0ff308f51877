//! Geographic value objects.

mod coordinates;

pub use coordinates::{CoordinateError, Coordinates};
