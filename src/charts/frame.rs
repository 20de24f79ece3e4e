//! Plot-area geometry shared by every recipe.

use crate::config::{ChartParams, Margin};
use crate::error::{Error, Result};
use crate::scale::{BandScale, LinearScale};
use crate::scene::SceneBuilder;

/// Inner and outer padding of band scales, as a fraction of the step.
pub(crate) const BAND_PADDING: f32 = 0.1;

/// Surface size and margins, with scale constructors for the plot area.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    width: f32,
    height: f32,
    margin: Margin,
}

impl Frame {
    pub(crate) fn new(params: &ChartParams) -> Result<Self> {
        let (width, height, margin) = (params.width, params.height, params.margin);
        for (name, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                let reason = format!("{value} is not a positive size");
                return Err(Error::InvalidParameter { name, reason });
            }
        }
        let sides = [margin.top, margin.right, margin.bottom, margin.left];
        if sides.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(Error::InvalidParameter {
                name: "margin",
                reason: "margins must be finite and >= 0".to_string(),
            });
        }
        if margin.left + margin.right >= width || margin.top + margin.bottom >= height {
            return Err(Error::InvalidParameter {
                name: "margin",
                reason: format!("margins leave no plot area in {width}x{height}"),
            });
        }
        Ok(Self { width, height, margin })
    }

    pub(crate) fn width(&self) -> f32 {
        self.width
    }

    pub(crate) fn height(&self) -> f32 {
        self.height
    }

    pub(crate) fn left(&self) -> f32 {
        self.margin.left
    }

    pub(crate) fn right(&self) -> f32 {
        self.width - self.margin.right
    }

    pub(crate) fn top(&self) -> f32 {
        self.margin.top
    }

    pub(crate) fn bottom(&self) -> f32 {
        self.height - self.margin.bottom
    }

    pub(crate) fn center_x(&self) -> f32 {
        (self.left() + self.right()) / 2.0
    }

    pub(crate) fn scene(&self) -> SceneBuilder {
        SceneBuilder::new(self.width, self.height)
    }

    /// Horizontal linear scale across the plot area.
    pub(crate) fn x_linear(&self, domain: (f32, f32), nice: bool) -> Result<LinearScale> {
        LinearScale::new(domain, (self.left(), self.right()), nice)
    }

    /// Vertical linear scale, increasing upward.
    pub(crate) fn y_linear(&self, domain: (f32, f32), nice: bool) -> Result<LinearScale> {
        LinearScale::new(domain, (self.bottom(), self.top()), nice)
    }

    /// Horizontal bands, first category on the left.
    pub(crate) fn x_band(&self, categories: Vec<String>) -> Result<BandScale> {
        BandScale::new(categories, (self.left(), self.right()), BAND_PADDING)
    }

    /// Vertical bands, first category at the top.
    pub(crate) fn y_band(&self, categories: Vec<String>) -> Result<BandScale> {
        BandScale::new(categories, (self.top(), self.bottom()), BAND_PADDING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;

    #[test]
    fn test_frame_edges() {
        let frame = Frame::new(&ChartParams::default()).expect("operation should succeed");
        assert_eq!(frame.left(), 40.0);
        assert_eq!(frame.right(), 470.0);
        assert_eq!(frame.top(), 20.0);
        assert_eq!(frame.bottom(), 270.0);
        assert_eq!(frame.center_x(), 255.0);
    }

    #[test]
    fn test_y_scale_points_up() {
        let frame = Frame::new(&ChartParams::default()).expect("operation should succeed");
        let y = frame.y_linear((0.0, 10.0), false).expect("operation should succeed");
        assert_eq!(y.scale(0.0), 270.0);
        assert_eq!(y.scale(10.0), 20.0);
    }

    #[test]
    fn test_frame_rejects_bad_sizes() {
        let params = ChartParams::default().size(0.0, 300.0);
        assert!(matches!(Frame::new(&params), Err(Error::InvalidParameter { name: "width", .. })));

        let params = ChartParams::default().size(60.0, 300.0);
        assert!(matches!(Frame::new(&params), Err(Error::InvalidParameter { name: "margin", .. })));

        let params = ChartParams::default().size(500.0, f32::NAN);
        assert!(matches!(Frame::new(&params), Err(Error::InvalidParameter { name: "height", .. })));
    }
}
