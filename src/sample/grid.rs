use crate::core::constants::{FULL_EXTENT_LAT_STEP, FULL_EXTENT_LNG_STEP};
use crate::core::math::round_half_up;
use crate::sample::strided::StridedRange;
use crate::view::{BoundingBox, ViewRequest};

/// One axis of the sampling walk, in `10^zoom`-scaled degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    origin: f64,
    direction: f64,
    iter_size: f64,
    step: f64,
}

impl Axis {
    fn new(start: f64, end: f64, scale: f64, step: f64) -> Self {
        // Walk away from `start` toward `end` whichever hemisphere they sit in
        let direction = if start - end > 0.0 { -1.0 } else { 1.0 };
        Self {
            origin: round_half_up(start * scale),
            direction,
            iter_size: round_half_up(start * scale - end * scale).abs(),
            step,
        }
    }

    fn offsets(&self) -> StridedRange {
        StridedRange::new(self.iter_size + 1.0, self.step)
    }

    fn at(&self, offset: f64, scale: f64) -> f64 {
        (self.origin + self.direction * offset) / scale
    }
}

/// The lat/lng lattice enumerated for a view request.
///
/// Full-extent views use a fixed coarse step; region views step by
/// `0.5 * q` in latitude and `q` in longitude, where `q` is the quality for
/// positive zoom and half the quality otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    bbox: BoundingBox,
    scale: f64,
    lat: Axis,
    lng: Axis,
}

impl SamplingGrid {
    pub fn for_view(view: &ViewRequest) -> Self {
        let bbox = view.bounding_box();
        let zoom = view.effective_zoom();
        let scale = 10f64.powf(zoom);

        let (lat_step, lng_step) = if view.full_extent {
            (FULL_EXTENT_LAT_STEP, FULL_EXTENT_LNG_STEP)
        } else {
            let q = if zoom > 0.0 {
                view.quality as f64
            } else {
                view.quality as f64 / 2.0
            };
            (0.5 * q, q)
        };

        Self {
            bbox,
            scale,
            lat: Axis::new(bbox.start_lat, bbox.end_lat, scale, lat_step),
            lng: Axis::new(bbox.start_lng, bbox.end_lng, scale, lng_step),
        }
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// `(lat, lng)` step sizes in scaled units.
    pub fn steps(&self) -> (f64, f64) {
        (self.lat.step, self.lng.step)
    }

    /// `(lat, lng)` iteration extents in scaled units.
    pub fn iter_sizes(&self) -> (f64, f64) {
        (self.lat.iter_size, self.lng.iter_size)
    }

    /// Number of `(rows, columns)` the walk visits.
    pub fn shape(&self) -> (usize, usize) {
        (self.lat.offsets().count(), self.lng.offsets().count())
    }

    /// Unwrapped `(lat, lng)` candidates in walk order: latitude-major.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lat.offsets().flat_map(move |i| {
            let lat = self.lat.at(i, self.scale);
            self.lng
                .offsets()
                .map(move |j| (lat, self.lng.at(j, self.scale)))
        })
    }
}
