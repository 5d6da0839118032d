use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Equirectangular projection of a geographic coordinate onto the canvas.
///
/// Returns `(x, y)` in pixels with `(0, 0)` at 180°W, 90°N. Inputs are not
/// clamped, so unwrapped coordinates land off-canvas.
pub fn to_screen(lat: f64, lng: f64) -> (f64, f64) {
    let x = (lng + 180.0) * (SCREEN_WIDTH / 360.0);
    let y = (-lat + 90.0) * (SCREEN_HEIGHT / 180.0);
    (x, y)
}

/// Folds a value that overshoots `[-limit, limit]` back into range once.
///
/// Only overshoot within one period is handled; `limit + 2*limit + 1` stays
/// out of range.
pub fn wrap_axis(v: f64, limit: f64) -> f64 {
    if v > limit {
        -(limit - (v - limit))
    } else if v < -limit {
        limit + (v + limit)
    } else {
        v
    }
}

/// Wraps latitude at ±90 and longitude at ±180 with a single fold each.
pub fn wrap(lat: f64, lng: f64) -> (f64, f64) {
    (wrap_axis(lat, 90.0), wrap_axis(lng, 180.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_corners() {
        assert_eq!(to_screen(90.0, -180.0), (0.0, 0.0));
        assert_eq!(to_screen(-90.0, 180.0), (1920.0, 1080.0));
        assert_eq!(to_screen(0.0, 0.0), (960.0, 540.0));
    }

    #[test]
    fn test_wrap_latitude_overshoot() {
        let (lat, _) = wrap(91.0, 0.0);
        assert_eq!(lat, -89.0);
        assert_eq!(to_screen(lat, 0.0), to_screen(-89.0, 0.0));

        let (lat, _) = wrap(-91.0, 0.0);
        assert_eq!(lat, 89.0);
    }

    #[test]
    fn test_wrap_longitude_overshoot() {
        assert_eq!(wrap(0.0, 190.0), (0.0, -170.0));
        assert_eq!(wrap(0.0, -190.0), (0.0, 170.0));
    }

    #[test]
    fn test_wrap_leaves_in_range_values() {
        assert_eq!(wrap(90.0, -180.0), (90.0, -180.0));
        assert_eq!(wrap(12.5, 42.0), (12.5, 42.0));
    }

    #[test]
    fn test_wrap_is_single_fold() {
        // 500° of longitude is more than one period past the limit
        assert_eq!(wrap_axis(500.0, 180.0), 140.0);
        assert!(wrap_axis(700.0, 180.0) > 180.0);
    }
}
