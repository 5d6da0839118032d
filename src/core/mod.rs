pub mod constants;
pub mod math;

pub use constants::{
    FULL_EXTENT_LAT_STEP, FULL_EXTENT_LNG_STEP, LAT_WINDOW, LNG_WINDOW, MAX_ELEVATION,
    MAX_LEVELS, MIN_ELEVATION, MIN_LEVELS, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use math::round_half_up;
