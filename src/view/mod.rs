pub mod bbox;
pub mod request;

pub use bbox::{BoundingBox, half_window};
pub use request::{Landmark, ViewRequest};
