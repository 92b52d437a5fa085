use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Hover tooltip ready for drawing: clamped position plus formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverOverlay {
    pub point: PixelPoint,
    pub tooltip_left: f64,
    pub tooltip_top: f64,
    pub value_text: String,
    pub time_text: String,
}

/// Everything a backend needs for one draw pass.
///
/// An empty `points` list is the explicit empty state; backends draw the
/// placeholder instead of a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub points: Vec<PixelPoint>,
    pub hover: Option<HoverOverlay>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, points: Vec<PixelPoint>, hover: Option<HoverOverlay>) -> Self {
        Self {
            viewport,
            points,
            hover,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "non-finite projected point at t={}",
                    point.sample.t
                )));
            }
        }

        if let Some(hover) = &self.hover {
            if !hover.tooltip_left.is_finite() || !hover.tooltip_top.is_finite() {
                return Err(ChartError::InvalidData(
                    "non-finite tooltip position".to_owned(),
                ));
            }
        }

        Ok(())
    }
}
