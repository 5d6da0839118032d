use crate::classify::color::{Rgb, color_range};
use crate::core::constants::{MAX_ELEVATION, MAX_LEVELS, MIN_ELEVATION, MIN_LEVELS};
use crate::error::TopoError;
use serde::{Deserialize, Serialize};

/// A contiguous elevation sub-range rendered in one colour.
///
/// Covers `[min_elev, max_elev)`; the top band of a [`BandSet`] also includes
/// `max_elev`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightBand {
    pub index: usize,
    pub min_elev: f64,
    pub max_elev: f64,
    pub color: Rgb,
}

impl HeightBand {
    pub fn width(&self) -> f64 {
        self.max_elev - self.min_elev
    }
}

/// `levels + 1` equal-width bands over the fixed Earth elevation domain.
///
/// # Example
///
/// ```
/// use topoview_rs::BandSet;
///
/// # fn main() -> Result<(), topoview_rs::TopoError> {
/// let bands = BandSet::new(2, false)?;
/// assert_eq!(bands.len(), 3);
/// assert_eq!(bands.band_for(-10921.0).map(|b| b.index), Some(0));
/// assert_eq!(bands.band_for(8849.0).map(|b| b.index), Some(2));
/// assert!(bands.band_for(9000.0).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    bands: Vec<HeightBand>,
    gray_scale: bool,
}

impl BandSet {
    /// Fails unless `levels` is within `[MIN_LEVELS, MAX_LEVELS]`.
    pub fn new(levels: u32, gray_scale: bool) -> Result<Self, TopoError> {
        if !(MIN_LEVELS..=MAX_LEVELS).contains(&levels) {
            return Err(TopoError::InvalidLevels(levels));
        }

        let count = levels as usize + 1;
        let width = (MAX_ELEVATION - MIN_ELEVATION) / count as f64;

        // Shared edges so neighbouring bands tile the domain without gaps
        let edge = |k: usize| {
            if k == count {
                MAX_ELEVATION
            } else {
                MIN_ELEVATION + width * k as f64
            }
        };

        let bands = color_range(count, gray_scale)
            .into_iter()
            .enumerate()
            .map(|(index, color)| HeightBand {
                index,
                min_elev: edge(index),
                max_elev: edge(index + 1),
                color,
            })
            .collect();

        Ok(Self { bands, gray_scale })
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn is_gray_scale(&self) -> bool {
        self.gray_scale
    }

    pub fn bands(&self) -> &[HeightBand] {
        &self.bands
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeightBand> {
        self.bands.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HeightBand> {
        self.bands.get(index)
    }

    /// The single band containing `elevation`, `None` outside the domain.
    pub fn band_for(&self, elevation: f64) -> Option<&HeightBand> {
        let top = self.bands.last()?;
        if elevation == top.max_elev {
            return Some(top);
        }

        let idx = self
            .bands
            .partition_point(|b| b.min_elev <= elevation)
            .checked_sub(1)?;
        let band = &self.bands[idx];
        (elevation < band.max_elev).then_some(band)
    }
}
