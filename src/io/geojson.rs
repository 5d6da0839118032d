use crate::classify::BandSet;
use crate::error::TopoError;
use crate::sample::Sample;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Converts classified samples to a GeoJSON feature collection of points.
///
/// Only samples whose elevation falls in a band become features; each carries
/// `elevation`, `band` and `color` properties.
pub fn samples_to_feature_collection(samples: &[Sample], bands: &BandSet) -> FeatureCollection {
    let features = samples
        .iter()
        .filter_map(|s| {
            let elevation = s.elevation?;
            let band = bands.band_for(elevation)?;

            let mut properties = JsonObject::new();
            properties.insert("elevation".to_string(), json!(elevation));
            properties.insert("band".to_string(), json!(band.index));
            properties.insert("color".to_string(), json!(band.color.to_string()));

            Some(Feature {
                bbox: None,
                geometry: Some(Geometry::from(&s.to_point())),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn write_geojson(
    samples: &[Sample],
    bands: &BandSet,
    path: impl AsRef<Path>,
) -> Result<(), TopoError> {
    let collection = samples_to_feature_collection(samples, bands);
    let mut file = File::create(path).map_err(|e| TopoError::IoError(e.to_string()))?;
    file.write_all(collection.to_string().as_bytes())
        .map_err(|e| TopoError::IoError(e.to_string()))
}
