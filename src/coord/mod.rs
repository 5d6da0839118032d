mod affine;
mod screen;

pub use affine::Affine;
pub use screen::{to_screen, wrap, wrap_axis};

use geo_types::Point;

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples as `(lng, lat)` and `geo_types::Point<f64>`.
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn lng(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lng(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lng(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}
