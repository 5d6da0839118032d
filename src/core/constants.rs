/// Canvas width in pixels
pub const SCREEN_WIDTH: f64 = 1920.0;

/// Canvas height in pixels
pub const SCREEN_HEIGHT: f64 = 1080.0;

/// Lowest elevation on Earth in metres (Challenger Deep)
pub const MIN_ELEVATION: f64 = -10921.0;

/// Highest elevation on Earth in metres (Everest)
pub const MAX_ELEVATION: f64 = 8849.0;

/// Latitude half-window numerator for region views
pub const LAT_WINDOW: f64 = 106.0;

/// Longitude half-window numerator for region views
pub const LNG_WINDOW: f64 = 377.0;

/// Latitude step used when sampling the full globe
pub const FULL_EXTENT_LAT_STEP: f64 = 8.5;

/// Longitude step used when sampling the full globe
pub const FULL_EXTENT_LNG_STEP: f64 = 9.5;

/// Colour level bounds [min, max]
pub const MIN_LEVELS: u32 = 2;
pub const MAX_LEVELS: u32 = 100;

/// Upper bound of the normalized 0-255 colour scale
pub(crate) const MAX_COLOR: f64 = 255.0;

/// Midpoint where the spectrum switches from red-green to green-blue
pub(crate) const COLOR_PIVOT: f64 = 128.0;
