use crate::coord::Affine;
use crate::error::TopoError;

/// Georeferencing tags read from a GeoTIFF image directory.
///
/// `pixel_scale` is `ModelPixelScaleTag` (`[sx, sy, sz]`) and `tiepoint` is
/// `ModelTiepointTag` (`[i, j, k, x, y, z]`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoKeys {
    pub pixel_scale: Option<[f64; 3]>,
    pub tiepoint: Option<[f64; 6]>,
}

impl GeoKeys {
    pub fn new(pixel_scale: [f64; 3], tiepoint: [f64; 6]) -> Self {
        Self {
            pixel_scale: Some(pixel_scale),
            tiepoint: Some(tiepoint),
        }
    }

    /// Derives the geographic-to-raster transform.
    ///
    /// GeoTIFF stores the y scale as a positive magnitude for north-up images,
    /// so it is negated here.
    pub fn to_affine(&self) -> Result<Affine, TopoError> {
        let scale = self
            .pixel_scale
            .ok_or(TopoError::MissingGeoKey("ModelPixelScale"))?;
        let tiepoint = self
            .tiepoint
            .ok_or(TopoError::MissingGeoKey("ModelTiepoint"))?;

        Affine::from_scale_origin(scale[0], -scale[1], tiepoint[3], tiepoint[4])
    }
}

/// A decoded single-band elevation raster.
///
/// Values are row-major: `values[row * width + col]` is the elevation of cell
/// `(col, row)`.
///
/// # Example
///
/// ```
/// use topoview_rs::{Affine, Raster};
///
/// # fn main() -> Result<(), topoview_rs::TopoError> {
/// let raster = Raster::new(2, vec![100.0, 200.0, 300.0, 400.0], Affine::IDENTITY)?;
/// assert_eq!(raster.height(), 2);
/// assert_eq!(raster.elevation_at(1, 1), Some(400.0));
/// assert_eq!(raster.elevation_at(2, 0), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    values: Vec<f64>,
    affine: Affine,
}

impl Raster {
    pub fn new(width: usize, values: Vec<f64>, affine: Affine) -> Result<Self, TopoError> {
        if width == 0 {
            return Err(TopoError::InvalidRaster("width must be positive".to_string()));
        }
        if values.is_empty() || values.len() % width != 0 {
            return Err(TopoError::InvalidRaster(format!(
                "{} values do not fill rows of width {}",
                values.len(),
                width
            )));
        }

        let height = values.len() / width;
        tracing::debug!(width, height, "raster prepared");

        Ok(Self {
            width,
            height,
            values,
            affine,
        })
    }

    /// Builds a raster from decoded values and its GeoTIFF georeferencing tags.
    ///
    /// Fails before any sampling can happen if the tags are missing or the
    /// pixel scale is zero.
    pub fn from_geo_keys(
        width: usize,
        values: Vec<f64>,
        keys: &GeoKeys,
    ) -> Result<Self, TopoError> {
        let affine = keys.to_affine()?;
        Self::new(width, values, affine)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn affine(&self) -> &Affine {
        &self.affine
    }

    /// Elevation of cell `(col, row)`, `None` outside the raster or for NaN cells.
    pub fn elevation_at(&self, col: i64, row: i64) -> Option<f64> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        let v = self.values[row * self.width + col];
        if v.is_nan() { None } else { Some(v) }
    }

    /// Elevation of the cell containing a geographic point.
    pub fn lookup(&self, lng: f64, lat: f64) -> Option<f64> {
        let (col, row) = self.affine.to_raster_index(lng, lat);
        self.elevation_at(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_raster() -> Result<Raster, TopoError> {
        Raster::new(2, vec![100.0, 200.0, 300.0, 400.0], Affine::IDENTITY)
    }

    #[test]
    fn test_lookup_identity_raster() -> Result<(), TopoError> {
        let raster = small_raster()?;

        assert_eq!(raster.lookup(0.0, 0.0), Some(100.0));
        assert_eq!(raster.lookup(1.0, 0.0), Some(200.0));
        assert_eq!(raster.lookup(0.0, 1.0), Some(300.0));
        assert_eq!(raster.lookup(1.0, 1.0), Some(400.0));
        assert_eq!(raster.lookup(1.9, 1.9), Some(400.0));
        Ok(())
    }

    #[test]
    fn test_lookup_miss_outside_bounds() -> Result<(), TopoError> {
        let raster = small_raster()?;

        assert_eq!(raster.lookup(2.0, 0.0), None);
        assert_eq!(raster.lookup(0.0, 2.0), None);
        assert_eq!(raster.lookup(-1.0, 0.0), None);
        assert_eq!(raster.elevation_at(-1, 1), None);
        Ok(())
    }

    #[test]
    fn test_nan_cells_are_misses() -> Result<(), TopoError> {
        let raster = Raster::new(2, vec![1.0, f64::NAN], Affine::IDENTITY)?;
        assert_eq!(raster.elevation_at(0, 0), Some(1.0));
        assert_eq!(raster.elevation_at(1, 0), None);
        Ok(())
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Raster::new(0, vec![1.0], Affine::IDENTITY),
            Err(TopoError::InvalidRaster(_))
        ));
        assert!(matches!(
            Raster::new(3, vec![1.0, 2.0], Affine::IDENTITY),
            Err(TopoError::InvalidRaster(_))
        ));
        assert!(Raster::new(2, vec![], Affine::IDENTITY).is_err());
    }

    #[test]
    fn test_from_geo_keys() -> Result<(), TopoError> {
        let keys = GeoKeys::new([90.0, 90.0, 0.0], [0.0, 0.0, 0.0, -180.0, 90.0, 0.0]);
        let raster = Raster::from_geo_keys(4, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], &keys)?;

        assert_eq!(raster.height(), 2);
        assert_eq!(raster.lookup(-135.0, 45.0), Some(1.0));
        assert_eq!(raster.lookup(135.0, -45.0), Some(8.0));
        Ok(())
    }

    #[test]
    fn test_missing_geo_keys() {
        let keys = GeoKeys {
            pixel_scale: None,
            tiepoint: Some([0.0; 6]),
        };
        assert_eq!(
            Raster::from_geo_keys(1, vec![0.0], &keys),
            Err(TopoError::MissingGeoKey("ModelPixelScale"))
        );

        let keys = GeoKeys {
            pixel_scale: Some([1.0, 1.0, 0.0]),
            tiepoint: None,
        };
        assert_eq!(
            keys.to_affine(),
            Err(TopoError::MissingGeoKey("ModelTiepoint"))
        );
    }

    #[test]
    fn test_zero_pixel_scale_is_fatal() {
        let keys = GeoKeys::new([0.0, 1.0, 0.0], [0.0; 6]);
        assert_eq!(
            Raster::from_geo_keys(1, vec![0.0], &keys),
            Err(TopoError::InvalidPixelScale(0.0))
        );
    }
}
