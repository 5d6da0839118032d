//! # topoview-rs
//!
//! Projects a planetary elevation raster onto a fixed 1920x1080 canvas and
//! quantizes it into colour bands. There are three main entry points.
//!
//! ### 1. `render` - One Call Per View
//!
//! ```
//! use topoview_rs::{Affine, Raster, ViewRequest, render};
//!
//! # fn main() -> Result<(), topoview_rs::TopoError> {
//! let affine = Affine::from_scale_origin(1.0, -1.0, -180.0, 90.0)?;
//! let raster = Raster::new(360, vec![-3000.0; 360 * 180], affine)?;
//!
//! let payload = render(&ViewRequest::full_extent().levels(20), &raster)?;
//! for group in &payload.groups {
//!     println!("{} -> {} cells", group.color, group.cells.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `sample` + `classify` - Pipeline Stages
//!
//! ```
//! use topoview_rs::{Affine, Landmark, Raster, ViewRequest, classify, sample};
//!
//! # fn main() -> Result<(), topoview_rs::TopoError> {
//! let affine = Affine::from_scale_origin(1.0, -1.0, -180.0, 90.0)?;
//! let raster = Raster::new(360, vec![8000.0; 360 * 180], affine)?;
//!
//! let view = ViewRequest::at(Landmark::Everest).zoom(0.5).quality(2);
//! let samples = sample(&view, &raster);
//! let payload = classify(&samples, view.levels, view.gray_scale)?;
//! println!("cell size {} x {}", payload.cell_delta_x, payload.cell_delta_y);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Exporters - JSON, CSV, GeoJSON, GeoParquet
//!
//! ```no_run
//! use topoview_rs::{Affine, BandSet, Raster, SamplesToGeoParquet, ViewRequest, sample};
//!
//! # fn main() -> Result<(), topoview_rs::TopoError> {
//! let raster = Raster::new(2, vec![100.0, 200.0, 300.0, 400.0], Affine::IDENTITY)?;
//! let view = ViewRequest::full_extent();
//! let samples = sample(&view, &raster);
//!
//! samples.to_geoparquet(&BandSet::new(view.levels, view.gray_scale)?, "samples.parquet")?;
//! # Ok(())
//! # }
//! ```
//!

pub mod classify;
pub mod coord;
pub mod core;
pub mod error;
pub mod io;
pub mod raster;
pub mod render;
pub mod sample;
pub mod view;

pub use classify::{BandSet, Cell, HeightBand, HeightGroup, RenderPayload, Rgb, classify};
pub use coord::{Affine, Coordinate, to_screen, wrap};
pub use self::core::{MAX_ELEVATION, MAX_LEVELS, MIN_ELEVATION, MIN_LEVELS, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use error::TopoError;
pub use io::{
    SamplesToArrow, SamplesToGeoParquet, payload_to_json_string, read_view_request,
    samples_to_feature_collection, write_geojson, write_geoparquet, write_payload,
    write_samples_csv,
};
pub use raster::{GeoKeys, Raster};
pub use render::render;
pub use sample::{Sample, SamplingGrid, sample};
pub use view::{BoundingBox, Landmark, ViewRequest};

pub use geo_types;
pub use geoarrow_array;
pub use geoarrow_schema;
pub use geoparquet;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// 1 degree global raster whose elevation climbs linearly from south to north.
    fn gradient_raster() -> Result<Raster, TopoError> {
        let keys = GeoKeys::new([1.0, 1.0, 0.0], [0.0, 0.0, 0.0, -180.0, 90.0, 0.0]);
        let span = MAX_ELEVATION - MIN_ELEVATION;
        let values = (0..180)
            .flat_map(|row| {
                let e = MAX_ELEVATION - span * row as f64 / 179.0;
                std::iter::repeat_n(e, 360)
            })
            .collect();
        Raster::from_geo_keys(360, values, &keys)
    }

    #[test]
    fn test_end_to_end_full_extent() -> Result<(), TopoError> {
        let raster = gradient_raster()?;
        let view = ViewRequest::full_extent().levels(10);

        let samples = sample(&view, &raster);
        let payload = render(&view, &raster)?;

        let hits = samples.iter().filter(|s| s.has_elevation()).count();
        assert_eq!(payload.cell_count(), hits);
        assert_eq!(payload.groups.len(), 11);

        let xs: HashSet<u64> = samples.iter().map(|s| s.screen_x.to_bits()).collect();
        let ys: HashSet<u64> = samples.iter().map(|s| s.screen_y.to_bits()).collect();
        assert!((payload.cell_delta_x * xs.len() as f64 - SCREEN_WIDTH).abs() < 1e-9);
        assert!((payload.cell_delta_y * ys.len() as f64 - SCREEN_HEIGHT).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_north_is_warm_south_is_cold() -> Result<(), TopoError> {
        let raster = gradient_raster()?;
        let payload = render(&ViewRequest::full_extent().levels(4), &raster)?;

        let top = payload.group(4).map(|g| g.color);
        let bottom = payload.group(0).map(|g| g.color);
        assert_eq!(top, Some(Rgb::new(255, 0, 0)));
        assert!(bottom.is_some_and(|c| c.b > c.r));

        // higher elevations sit nearer the top of the canvas
        let mean_y = |band: usize| {
            payload
                .group(band)
                .map(|g| g.cells.iter().map(|c| c.y).sum::<f64>() / g.cells.len() as f64)
        };
        assert!(mean_y(4) < mean_y(0));
        Ok(())
    }

    #[test]
    fn test_full_extent_independent_of_zoom() -> Result<(), TopoError> {
        let raster = gradient_raster()?;
        let a = ViewRequest::full_extent().zoom(0.0);
        let b = ViewRequest::full_extent().zoom(1.0);

        assert_eq!(a.bounding_box(), b.bounding_box());
        assert_eq!(sample(&a, &raster).len(), sample(&b, &raster).len());
        assert_eq!(render(&a, &raster)?, render(&b, &raster)?);
        Ok(())
    }

    #[test]
    fn test_landmark_regions_render() -> Result<(), TopoError> {
        let raster = gradient_raster()?;

        for landmark in Landmark::ALL {
            for zoom in [0.0, 0.5, 1.0] {
                let view = ViewRequest::at(landmark).zoom(zoom).quality(3).gray_scale(true);
                let payload = render(&view, &raster)?;
                assert!(payload.cell_count() > 0, "{} at zoom {}", landmark.name(), zoom);
                assert!(payload.cell_delta_x > 0.0);
                assert!(payload.cell_delta_y > 0.0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
        let raster = gradient_raster()?;
        let view = ViewRequest::at(Landmark::MarianaTrench).zoom(0.3).levels(37);

        let a = payload_to_json_string(&render(&view, &raster)?)?;
        let b = payload_to_json_string(&render(&view, &raster)?)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_two_by_two_raster_lookup() -> Result<(), TopoError> {
        let raster = Raster::new(2, vec![100.0, 200.0, 300.0, 400.0], Affine::IDENTITY)?;
        assert_eq!(Sample::probe(0.0, 0.0, &raster).elevation, Some(100.0));
        assert_eq!(Sample::probe(1.0, 1.0, &raster).elevation, Some(400.0));
        Ok(())
    }

    #[test]
    fn test_wrap_then_project() {
        let (lat, lng) = wrap(91.0, 0.0);
        assert_eq!(lat, -89.0);
        assert_eq!(to_screen(lat, lng), to_screen(-89.0, 0.0));
    }
}
