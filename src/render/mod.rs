mod frame;
mod null_renderer;

pub use frame::{HoverOverlay, RenderFrame};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic [`RenderFrame`] so
/// drawing code stays isolated from viewport and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
