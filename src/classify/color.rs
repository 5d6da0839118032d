use crate::core::constants::{COLOR_PIVOT, MAX_COLOR};
use serde::{Deserialize, Serialize};

/// An 8-bit sRGB colour, displayed as a CSS `rgb(r,g,b)` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Mean channel value.
    pub fn brightness(&self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, MAX_COLOR) as u8
}

/// Colour of position `value` on the normalized 0-255 scale.
///
/// Red fades into green up to the pivot at 128, then green into blue.
pub fn spectrum(value: f64) -> Rgb {
    let (r, g, b) = if value <= COLOR_PIVOT {
        let g = value / COLOR_PIVOT;
        (1.0 - g, g, 0.0)
    } else {
        let b = (value - (COLOR_PIVOT - 1.0)) / COLOR_PIVOT;
        (0.0, 1.0 - b, b)
    };
    Rgb::new(
        channel(r * MAX_COLOR),
        channel(g * MAX_COLOR),
        channel(b * MAX_COLOR),
    )
}

/// `count` evenly spaced colours for `count` elevation bands, lowest band first.
///
/// The spectrum is reversed so the highest band gets red; the grayscale ramp
/// runs from black at the lowest band upward.
pub fn color_range(count: usize, gray_scale: bool) -> Vec<Rgb> {
    if count == 0 {
        return Vec::new();
    }

    let cap = MAX_COLOR / count as f64;
    let positions = (0..count).map(|lvl| lvl as f64 * cap);

    if gray_scale {
        positions.map(|c| Rgb::gray(channel(c))).collect()
    } else {
        let mut colors: Vec<Rgb> = positions.map(spectrum).collect();
        colors.reverse();
        colors
    }
}
