use crate::core::math::truncate_index;
use crate::error::TopoError;

/// Six-coefficient affine transform from geographic coordinates to raster cells.
///
/// `col = a0 + a1 * lng + a2 * lat`, `row = a3 + a4 * lng + a5 * lat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(pub [f64; 6]);

impl Affine {
    pub const IDENTITY: Affine = Affine([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Builds the geographic-to-raster transform of a north-up raster.
    ///
    /// `sx`/`sy` are the signed cell sizes in degrees and `origin_lng`/`origin_lat`
    /// the coordinate of the raster's (0, 0) corner.
    pub fn from_scale_origin(
        sx: f64,
        sy: f64,
        origin_lng: f64,
        origin_lat: f64,
    ) -> Result<Self, TopoError> {
        for s in [sx, sy] {
            if s == 0.0 || !s.is_finite() {
                return Err(TopoError::InvalidPixelScale(s));
            }
        }

        Ok(Affine([
            -origin_lng / sx,
            1.0 / sx,
            0.0,
            -origin_lat / sy,
            0.0,
            1.0 / sy,
        ]))
    }

    pub fn coefficients(&self) -> &[f64; 6] {
        &self.0
    }

    /// Fractional raster coordinate `(col, row)` of a geographic point.
    pub fn to_raster(&self, lng: f64, lat: f64) -> (f64, f64) {
        let m = &self.0;
        (
            m[0] + m[1] * lng + m[2] * lat,
            m[3] + m[4] * lng + m[5] * lat,
        )
    }

    /// Integer cell `(col, row)` of a geographic point, truncated toward zero.
    pub fn to_raster_index(&self, lng: f64, lat: f64) -> (i64, i64) {
        let (col, row) = self.to_raster(lng, lat);
        (truncate_index(col), truncate_index(row))
    }
}
