use crate::classify::bands::BandSet;
use crate::classify::color::Rgb;
use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::TopoError;
use crate::sample::Sample;
use geo::BoundingRect;
use geo_types::{MultiPoint, Rect};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// A sample rescaled to canvas space, ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub elevation: f64,
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.serialize_element(&self.elevation)?;
        seq.end()
    }
}

/// All cells falling in one elevation band.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGroup {
    pub band: usize,
    pub color: Rgb,
    pub cells: Vec<Cell>,
}

/// Everything the renderer needs: cells grouped by colour plus the cell size.
///
/// Groups are ordered by band index and only non-empty bands appear. On the
/// wire this becomes
/// `{"heightGroups": {"rgb(r,g,b)": [[x, y, elevation], ...]}, "cellDeltaX": .., "cellDeltaY": ..}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPayload {
    pub groups: Vec<HeightGroup>,
    pub cell_delta_x: f64,
    pub cell_delta_y: f64,
}

impl RenderPayload {
    pub fn cell_count(&self) -> usize {
        self.groups.iter().map(|g| g.cells.len()).sum()
    }

    pub fn group(&self, band: usize) -> Option<&HeightGroup> {
        self.groups.iter().find(|g| g.band == band)
    }

    /// `(colour key, cells)` pairs in band order.
    ///
    /// Bands whose colours render to the same string share one key, with the
    /// lower band's cells first.
    pub fn color_groups(&self) -> Vec<(String, Vec<Cell>)> {
        let mut out: Vec<(String, Vec<Cell>)> = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let key = group.color.to_string();
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some((_, cells)) => cells.extend_from_slice(&group.cells),
                None => out.push((key, group.cells.clone())),
            }
        }
        out
    }
}

struct ColorGroups<'a>(&'a RenderPayload);

impl Serialize for ColorGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups = self.0.color_groups();
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (key, cells) in &groups {
            map.serialize_entry(key, cells)?;
        }
        map.end()
    }
}

impl Serialize for RenderPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("heightGroups", &ColorGroups(self))?;
        map.serialize_entry("cellDeltaX", &self.cell_delta_x)?;
        map.serialize_entry("cellDeltaY", &self.cell_delta_y)?;
        map.end()
    }
}

/// Bounding rectangle of the raw screen coordinates of all samples.
pub fn screen_extent(samples: &[Sample]) -> Option<Rect<f64>> {
    let points: MultiPoint<f64> = samples.iter().map(Sample::screen_point).collect();
    points.bounding_rect()
}

fn distinct_count(values: impl Iterator<Item = f64>) -> usize {
    // +0.0 folds -0.0 onto 0.0 so both count once
    values
        .map(|v| (v + 0.0).to_bits())
        .collect::<HashSet<u64>>()
        .len()
}

/// Groups samples into elevation bands and rescales them to the canvas.
///
/// Fails with [`TopoError::InvalidLevels`] outside `[MIN_LEVELS, MAX_LEVELS]`,
/// and if the samples do not span at least two distinct screen columns and
/// two distinct rows. Samples without an elevation, or outside the elevation
/// domain, still count toward the screen extent and cell size but are not
/// painted.
///
/// # Example
///
/// ```
/// use topoview_rs::{Sample, classify};
///
/// # fn main() -> Result<(), topoview_rs::TopoError> {
/// let samples = vec![
///     Sample { lat: 0.0, lng: 0.0, screen_x: 0.0, screen_y: 0.0, elevation: Some(-5000.0) },
///     Sample { lat: 0.0, lng: 0.0, screen_x: 10.0, screen_y: 10.0, elevation: Some(8849.0) },
/// ];
///
/// let payload = classify(&samples, 2, false)?;
/// assert_eq!(payload.cell_count(), 2);
/// assert_eq!(payload.cell_delta_x, 960.0);
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(skip(samples), fields(samples = samples.len()))]
pub fn classify(
    samples: &[Sample],
    levels: u32,
    gray_scale: bool,
) -> Result<RenderPayload, TopoError> {
    let bands = BandSet::new(levels, gray_scale)?;
    let extent = screen_extent(samples)
        .ok_or_else(|| TopoError::DegenerateViewport("no samples".to_string()))?;

    let (min_x, min_y) = (extent.min().x, extent.min().y);
    let (diff_x, diff_y) = (extent.width(), extent.height());
    if diff_x == 0.0 || diff_y == 0.0 {
        return Err(TopoError::DegenerateViewport(format!(
            "screen extent {} x {}",
            diff_x, diff_y
        )));
    }

    let mut buckets: Vec<Vec<Cell>> = vec![Vec::new(); bands.len()];
    let mut dropped = 0usize;

    for s in samples {
        let Some((elevation, band)) = s
            .elevation
            .and_then(|e| bands.band_for(e).map(|b| (e, b.index)))
        else {
            dropped += 1;
            continue;
        };
        buckets[band].push(Cell {
            x: (s.screen_x - min_x) / diff_x * SCREEN_WIDTH,
            y: (s.screen_y - min_y) / diff_y * SCREEN_HEIGHT,
            elevation,
        });
    }

    let groups: Vec<HeightGroup> = bands
        .iter()
        .zip(buckets)
        .filter(|(_, cells)| !cells.is_empty())
        .map(|(band, cells)| HeightGroup {
            band: band.index,
            color: band.color,
            cells,
        })
        .collect();

    let count_x = distinct_count(samples.iter().map(|s| s.screen_x));
    let count_y = distinct_count(samples.iter().map(|s| s.screen_y));
    tracing::debug!(
        groups = groups.len(),
        dropped,
        count_x,
        count_y,
        "samples classified"
    );

    Ok(RenderPayload {
        groups,
        cell_delta_x: SCREEN_WIDTH / count_x as f64,
        cell_delta_y: SCREEN_HEIGHT / count_y as f64,
    })
}
