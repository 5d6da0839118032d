/// Error type for topoview-rs operations.
#[derive(Debug, PartialEq)]
pub enum TopoError {
    /// The raster dimensions or values are inconsistent.
    InvalidRaster(String),
    /// A required GeoTIFF tag is missing.
    MissingGeoKey(&'static str),
    /// A pixel scale component is zero or not finite.
    InvalidPixelScale(f64),
    /// The number of colour levels is outside the valid range (2-100).
    InvalidLevels(u32),
    /// The sampling quality must be at least 1.
    InvalidQuality(u32),
    /// The zoom factor is not a finite number.
    InvalidZoom(f64),
    /// A centre coordinate is not a finite number.
    InvalidCoordinate(String),
    /// All samples collapsed onto a single screen row or column.
    DegenerateViewport(String),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// JSON encoding or decoding error.
    JsonError(String),
}

impl std::fmt::Display for TopoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopoError::InvalidRaster(msg) => write!(f, "Invalid raster: {}", msg),
            TopoError::MissingGeoKey(key) => write!(f, "Missing GeoTIFF tag: {}", key),
            TopoError::InvalidPixelScale(s) => write!(f, "Invalid pixel scale: {}", s),
            TopoError::InvalidLevels(l) => write!(f, "Invalid colour levels: {}", l),
            TopoError::InvalidQuality(q) => write!(f, "Invalid quality: {}", q),
            TopoError::InvalidZoom(z) => write!(f, "Invalid zoom: {}", z),
            TopoError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            TopoError::DegenerateViewport(msg) => write!(f, "Degenerate viewport: {}", msg),
            TopoError::IoError(msg) => write!(f, "IO error: {}", msg),
            TopoError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            TopoError::JsonError(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for TopoError {}
