use crate::core::constants::{LAT_WINDOW, LNG_WINDOW};
use crate::view::request::ViewRequest;
use geo_types::{Rect, coord};

/// Geographic window walked by the sampler.
///
/// `start` and `end` are ordered as the walk sees them, not as min/max: a region
/// starts at `center + half_window` and ends at `center - half_window`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
}

impl BoundingBox {
    pub const GLOBE: BoundingBox = BoundingBox {
        start_lat: -90.0,
        start_lng: -180.0,
        end_lat: 90.0,
        end_lng: 180.0,
    };

    pub fn for_view(view: &ViewRequest) -> Self {
        if view.full_extent {
            return Self::GLOBE;
        }

        let (half_lat, half_lng) = half_window(view.effective_zoom());
        Self {
            start_lat: view.center_lat + half_lat,
            start_lng: view.center_lng + half_lng,
            end_lat: view.center_lat - half_lat,
            end_lng: view.center_lng - half_lng,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.start_lat + self.end_lat) / 2.0,
            (self.start_lng + self.end_lng) / 2.0,
        )
    }

    /// Converts to a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.start_lng, y: self.start_lat },
            coord! { x: self.end_lng, y: self.end_lat },
        )
    }
}

/// `(lat, lng)` half-window for a region view.
///
/// The divisor halves again for non-positive zoom.
pub fn half_window(zoom: f64) -> (f64, f64) {
    let scale = 10f64.powf(zoom);
    let divisor = if zoom > 0.0 { 2.0 } else { 4.0 };
    (LAT_WINDOW / scale / divisor, LNG_WINDOW / scale / divisor)
}
