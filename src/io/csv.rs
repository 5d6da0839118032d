use crate::classify::BandSet;
use crate::error::TopoError;
use crate::sample::Sample;
use std::fs::File;
use std::path::Path;
use wkt::ToWkt;

const HEADER: [&str; 8] = [
    "lng",
    "lat",
    "screen_x",
    "screen_y",
    "elevation",
    "band",
    "color",
    "geometry",
];

/// Writes raw samples with their band assignment to a CSV file.
///
/// The `geometry` column holds the wrapped lng/lat as WKT `POINT`. Lookup
/// misses and out-of-domain elevations leave the band columns empty.
///
/// # Example
///
/// ```no_run
/// use topoview_rs::{Affine, BandSet, Raster, ViewRequest, sample, write_samples_csv};
///
/// # fn main() -> Result<(), topoview_rs::TopoError> {
/// let raster = Raster::new(2, vec![100.0, 200.0, 300.0, 400.0], Affine::IDENTITY)?;
/// let view = ViewRequest::full_extent();
/// let samples = sample(&view, &raster);
///
/// write_samples_csv(&samples, &BandSet::new(view.levels, view.gray_scale)?, "samples.csv")?;
/// # Ok(())
/// # }
/// ```
pub fn write_samples_csv(
    samples: &[Sample],
    bands: &BandSet,
    output_path: impl AsRef<Path>,
) -> Result<(), TopoError> {
    let out_file = File::create(output_path).map_err(|e| TopoError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    writer
        .write_record(HEADER)
        .map_err(|e| TopoError::CsvError(e.to_string()))?;

    for s in samples {
        let band = s.elevation.and_then(|e| bands.band_for(e));
        let row = [
            s.lng.to_string(),
            s.lat.to_string(),
            s.screen_x.to_string(),
            s.screen_y.to_string(),
            s.elevation.map(|e| e.to_string()).unwrap_or_default(),
            band.map(|b| b.index.to_string()).unwrap_or_default(),
            band.map(|b| b.color.to_string()).unwrap_or_default(),
            s.to_point().wkt_string(),
        ];
        writer
            .write_record(&row)
            .map_err(|e| TopoError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| TopoError::CsvError(e.to_string()))?;

    Ok(())
}
