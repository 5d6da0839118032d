use crate::classify::BandSet;
use crate::error::TopoError;
use crate::sample::Sample;
use arrow_array::{Float64Array, RecordBatch, StringArray, UInt32Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::PointArray;
use geoarrow_array::builder::PointBuilder;
use geoarrow_schema::{Crs, Dimension, Metadata, PointType};
use rayon::prelude::*;
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`Sample`]s to Arrow arrays.
///
/// Implemented for `[Sample]` and `Vec<Sample>`.
pub trait SamplesToArrow {
    /// Converts wrapped sample locations to an EPSG:4326 PointArray.
    fn to_arrow_points(&self) -> PointArray;
    /// Converts samples to a RecordBatch with lng, lat, screen_x, screen_y,
    /// elevation, band, color and geometry.
    fn to_record_batch(&self, bands: &BandSet) -> Result<RecordBatch, TopoError>;
}

impl SamplesToArrow for [Sample] {
    fn to_arrow_points(&self) -> PointArray {
        let point = PointType::new(Dimension::XY, wgs84_metadata());
        let mut builder = PointBuilder::with_capacity(point, self.len());

        for s in self {
            builder.push_point(Some(&s.to_point()));
        }
        builder.finish()
    }

    fn to_record_batch(&self, bands: &BandSet) -> Result<RecordBatch, TopoError> {
        let point_array = self.to_arrow_points();

        let assigned: Vec<Option<(u32, String)>> = self
            .par_iter()
            .map(|s| {
                s.elevation
                    .and_then(|e| bands.band_for(e))
                    .map(|b| (b.index as u32, b.color.to_string()))
            })
            .collect();

        let lngs: Float64Array = self.iter().map(|s| Some(s.lng)).collect();
        let lats: Float64Array = self.iter().map(|s| Some(s.lat)).collect();
        let screen_xs: Float64Array = self.iter().map(|s| Some(s.screen_x)).collect();
        let screen_ys: Float64Array = self.iter().map(|s| Some(s.screen_y)).collect();
        let elevations: Float64Array = self.iter().map(|s| s.elevation).collect();
        let band_ids: UInt32Array = assigned.iter().map(|a| a.as_ref().map(|(i, _)| *i)).collect();
        let colors: StringArray = assigned
            .iter()
            .map(|a| a.as_ref().map(|(_, c)| c.as_str()))
            .collect();

        let geometry_field = point_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("lng", DataType::Float64, false),
            Field::new("lat", DataType::Float64, false),
            Field::new("screen_x", DataType::Float64, false),
            Field::new("screen_y", DataType::Float64, false),
            Field::new("elevation", DataType::Float64, true),
            Field::new("band", DataType::UInt32, true),
            Field::new("color", DataType::Utf8, true),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(lngs),
                Arc::new(lats),
                Arc::new(screen_xs),
                Arc::new(screen_ys),
                Arc::new(elevations),
                Arc::new(band_ids),
                Arc::new(colors),
                Arc::new(point_array.into_arrow()),
            ],
        )
        .map_err(|e| TopoError::IoError(e.to_string()))
    }
}

impl SamplesToArrow for Vec<Sample> {
    fn to_arrow_points(&self) -> PointArray {
        self.as_slice().to_arrow_points()
    }

    fn to_record_batch(&self, bands: &BandSet) -> Result<RecordBatch, TopoError> {
        self.as_slice().to_record_batch(bands)
    }
}
