pub mod bands;
pub mod color;
pub mod payload;

pub use bands::{BandSet, HeightBand};
pub use color::{Rgb, color_range, spectrum};
pub use payload::{Cell, HeightGroup, RenderPayload, classify, screen_extent};
