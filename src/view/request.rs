use crate::coord::Coordinate;
use crate::core::constants::{MAX_LEVELS, MIN_LEVELS};
use crate::error::TopoError;
use crate::sample::SamplingGrid;
use crate::view::bbox::BoundingBox;
use serde::{Deserialize, Serialize};

/// Preset centres offered by the map page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    NullIsland,
    Everest,
    MarianaTrench,
}

impl Landmark {
    pub const ALL: [Landmark; 3] = [Landmark::NullIsland, Landmark::Everest, Landmark::MarianaTrench];

    /// `(lat, lng)` of the landmark in degrees.
    pub fn lat_lng(&self) -> (f64, f64) {
        match self {
            Landmark::NullIsland => (0.0, 0.0),
            Landmark::Everest => (27.988093, 86.924972),
            Landmark::MarianaTrench => (11.346521, 142.197337),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Landmark::NullIsland => "Null Island",
            Landmark::Everest => "Everest",
            Landmark::MarianaTrench => "Mariana Trench",
        }
    }
}

/// Parameters of a single map render.
///
/// Field names follow the page's JSON body (`centerLat`, `grayScale`, ...);
/// missing fields fall back to the page defaults (full globe, zoom 1,
/// quality 1, 100 levels, spectrum colours).
///
/// # Example
///
/// ```
/// use topoview_rs::{Landmark, ViewRequest};
///
/// let full = ViewRequest::full_extent().levels(20);
/// assert!(full.full_extent);
///
/// let everest = ViewRequest::at(Landmark::Everest).zoom(1.0).quality(2);
/// assert!(!everest.full_extent);
/// assert!(everest.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewRequest {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    pub quality: u32,
    pub levels: u32,
    pub gray_scale: bool,
    pub full_extent: bool,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            center_lat: 0.0,
            center_lng: 0.0,
            zoom: 1.0,
            quality: 1,
            levels: 100,
            gray_scale: false,
            full_extent: true,
        }
    }
}

impl ViewRequest {
    /// Request covering the whole globe.
    pub fn full_extent() -> Self {
        Self::default()
    }

    /// Region request centred on a `(lng, lat)` coordinate.
    pub fn region(center: &impl Coordinate) -> Self {
        Self {
            center_lat: center.lat(),
            center_lng: center.lng(),
            full_extent: false,
            ..Self::default()
        }
    }

    /// Region request centred on a preset landmark.
    pub fn at(landmark: Landmark) -> Self {
        let (lat, lng) = landmark.lat_lng();
        Self::region(&(lng, lat))
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    pub fn levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    pub fn gray_scale(mut self, gray_scale: bool) -> Self {
        self.gray_scale = gray_scale;
        self
    }

    /// Zoom actually used for sampling; full-extent requests always use 1.
    pub fn effective_zoom(&self) -> f64 {
        if self.full_extent { 1.0 } else { self.zoom }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::for_view(self)
    }

    pub fn validate(&self) -> Result<(), TopoError> {
        if !(MIN_LEVELS..=MAX_LEVELS).contains(&self.levels) {
            return Err(TopoError::InvalidLevels(self.levels));
        }
        if self.quality == 0 {
            return Err(TopoError::InvalidQuality(self.quality));
        }
        let scale = 10f64.powf(self.effective_zoom());
        if !scale.is_finite() || scale == 0.0 {
            return Err(TopoError::InvalidZoom(self.zoom));
        }
        if !self.center_lat.is_finite() || !self.center_lng.is_finite() {
            return Err(TopoError::InvalidCoordinate(format!(
                "({}, {})",
                self.center_lat, self.center_lng
            )));
        }

        // A subnormal 10^zoom pushes the window to infinity
        let bbox = self.bounding_box();
        let corners = [bbox.start_lat, bbox.start_lng, bbox.end_lat, bbox.end_lng];
        if corners.iter().any(|v| !v.is_finite()) {
            return Err(TopoError::InvalidZoom(self.zoom));
        }
        let (lat_iter, lng_iter) = SamplingGrid::for_view(self).iter_sizes();
        if !lat_iter.is_finite() || !lng_iter.is_finite() {
            return Err(TopoError::InvalidCoordinate(format!(
                "({}, {}) overflows at zoom {}",
                self.center_lat, self.center_lng, self.zoom
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let view = ViewRequest::default();
        assert!(view.full_extent);
        assert_eq!(view.zoom, 1.0);
        assert_eq!(view.quality, 1);
        assert_eq!(view.levels, 100);
        assert!(!view.gray_scale);
    }

    #[test]
    fn test_full_extent_ignores_zoom() {
        let view = ViewRequest::full_extent().zoom(3.0);
        assert_eq!(view.effective_zoom(), 1.0);

        let view = ViewRequest::region(&(0.0, 0.0)).zoom(3.0);
        assert_eq!(view.effective_zoom(), 3.0);
    }

    #[test]
    fn test_landmark_request() {
        let view = ViewRequest::at(Landmark::MarianaTrench);
        assert_eq!(view.center_lat, 11.346521);
        assert_eq!(view.center_lng, 142.197337);
        assert!(!view.full_extent);
    }

    #[test]
    fn test_validate_levels() {
        assert_eq!(
            ViewRequest::default().levels(1).validate(),
            Err(TopoError::InvalidLevels(1))
        );
        assert_eq!(
            ViewRequest::default().levels(101).validate(),
            Err(TopoError::InvalidLevels(101))
        );
        assert!(ViewRequest::default().levels(2).validate().is_ok());
        assert!(ViewRequest::default().levels(100).validate().is_ok());
    }

    #[test]
    fn test_validate_quality_and_zoom() {
        assert_eq!(
            ViewRequest::default().quality(0).validate(),
            Err(TopoError::InvalidQuality(0))
        );
        assert!(matches!(
            ViewRequest::region(&(0.0, 0.0)).zoom(f64::INFINITY).validate(),
            Err(TopoError::InvalidZoom(_))
        ));
        assert!(ViewRequest::full_extent().zoom(f64::NAN).validate().is_ok());
        assert!(matches!(
            ViewRequest::region(&(f64::NAN, 0.0)).validate(),
            Err(TopoError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unbounded_window() {
        for zoom in [-310.0, -320.0] {
            let view = ViewRequest::region(&(0.0, 0.0)).zoom(zoom);
            assert!(view.bounding_box().start_lat.is_infinite());
            assert_eq!(view.validate(), Err(TopoError::InvalidZoom(zoom)));
        }

        // large but finite windows are still accepted
        assert!(ViewRequest::region(&(0.0, 0.0)).zoom(-300.0).validate().is_ok());

        assert!(matches!(
            ViewRequest::region(&(1e308, 0.0)).zoom(1.0).validate(),
            Err(TopoError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() -> Result<(), serde_json::Error> {
        let view: ViewRequest =
            serde_json::from_str(r#"{"centerLat": 27.9, "centerLng": 86.9, "fullExtent": false, "grayScale": true}"#)?;

        assert_eq!(view.center_lat, 27.9);
        assert_eq!(view.center_lng, 86.9);
        assert!(!view.full_extent);
        assert!(view.gray_scale);
        assert_eq!(view.levels, 100);
        assert_eq!(view.quality, 1);
        Ok(())
    }
}
