use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub last_had_hover: bool,
    pub empty_frames: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_point_count = frame.points.len();
        self.last_had_hover = frame.hover.is_some();
        if frame.is_empty() {
            self.empty_frames += 1;
        }
        Ok(())
    }
}
