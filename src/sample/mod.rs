pub mod grid;
pub mod strided;

pub use grid::SamplingGrid;
pub use strided::StridedRange;

use crate::coord::{to_screen, wrap};
use crate::raster::Raster;
use crate::view::ViewRequest;
use geo_types::Point;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One probe of the raster taken during the viewport walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Wrapped latitude used for the raster lookup
    pub lat: f64,
    /// Wrapped longitude used for the raster lookup
    pub lng: f64,
    /// Canvas x of the unwrapped coordinate
    pub screen_x: f64,
    /// Canvas y of the unwrapped coordinate
    pub screen_y: f64,
    /// `None` when the cell falls outside the raster
    pub elevation: Option<f64>,
}

impl Sample {
    /// Projects an unwrapped grid coordinate and reads its raster cell.
    ///
    /// Screen coordinates are taken before wrapping, so overshooting points
    /// sit just past the canvas edge while their elevation comes from the
    /// opposite side of the raster.
    pub fn probe(lat: f64, lng: f64, raster: &Raster) -> Self {
        let (screen_x, screen_y) = to_screen(lat, lng);
        let (lat, lng) = wrap(lat, lng);
        Self {
            lat,
            lng,
            screen_x,
            screen_y,
            elevation: raster.lookup(lng, lat),
        }
    }

    pub fn has_elevation(&self) -> bool {
        self.elevation.is_some()
    }

    /// Geographic point with x = longitude, y = latitude.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    pub fn screen_point(&self) -> Point<f64> {
        Point::new(self.screen_x, self.screen_y)
    }
}

/// Walks the sampling grid of `view` and probes `raster` at every point.
///
/// Samples come back in walk order, duplicates and lookup misses included.
///
/// # Example
///
/// ```
/// use topoview_rs::{Affine, Raster, ViewRequest, sample};
///
/// # fn main() -> Result<(), topoview_rs::TopoError> {
/// let affine = Affine::from_scale_origin(1.0, -1.0, -180.0, 90.0)?;
/// let raster = Raster::new(360, vec![0.0; 360 * 180], affine)?;
///
/// let samples = sample(&ViewRequest::full_extent(), &raster);
/// assert_eq!(samples.len(), 212 * 380);
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(skip(raster), fields(raster_width = raster.width()))]
pub fn sample(view: &ViewRequest, raster: &Raster) -> Vec<Sample> {
    let grid = SamplingGrid::for_view(view);
    let (rows, cols) = grid.shape();
    tracing::debug!(rows, cols, steps = ?grid.steps(), "sampling grid");

    let points: Vec<(f64, f64)> = grid.points().collect();
    let samples: Vec<Sample> = points
        .par_iter()
        .map(|&(lat, lng)| Sample::probe(lat, lng, raster))
        .collect();

    let misses = samples.iter().filter(|s| !s.has_elevation()).count();
    tracing::debug!(samples = samples.len(), misses, "raster sampled");
    if misses == samples.len() {
        tracing::warn!("no sample of the view hit the raster");
    }

    samples
}
