use crate::classify::{RenderPayload, classify};
use crate::error::TopoError;
use crate::raster::Raster;
use crate::sample::sample;
use crate::view::ViewRequest;

/// Validates `view`, samples `raster` and classifies the result.
///
/// # Example
///
/// ```
/// use topoview_rs::{Affine, Landmark, Raster, ViewRequest, render};
///
/// # fn main() -> Result<(), topoview_rs::TopoError> {
/// let affine = Affine::from_scale_origin(1.0, -1.0, -180.0, 90.0)?;
/// let raster = Raster::new(360, vec![120.0; 360 * 180], affine)?;
///
/// let payload = render(&ViewRequest::at(Landmark::Everest).levels(10), &raster)?;
/// assert_eq!(payload.groups.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn render(view: &ViewRequest, raster: &Raster) -> Result<RenderPayload, TopoError> {
    view.validate()?;
    let samples = sample(view, raster);
    classify(&samples, view.levels, view.gray_scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Affine;

    #[test]
    fn test_render_rejects_invalid_view() -> Result<(), TopoError> {
        let raster = Raster::new(2, vec![1.0, 2.0, 3.0, 4.0], Affine::IDENTITY)?;
        let result = render(&ViewRequest::full_extent().levels(0), &raster);
        assert_eq!(result, Err(TopoError::InvalidLevels(0)));
        Ok(())
    }

    #[test]
    fn test_render_rejects_overflowing_zoom() -> Result<(), TopoError> {
        let raster = Raster::new(2, vec![1.0, 2.0, 3.0, 4.0], Affine::IDENTITY)?;
        let view = ViewRequest::region(&(0.0, 0.0)).zoom(-310.0);
        assert_eq!(render(&view, &raster), Err(TopoError::InvalidZoom(-310.0)));
        Ok(())
    }
}
