mod engine;

pub use engine::ChartEngine;

use crate::core::{PlotInsets, Viewport};
use crate::interaction::TooltipLayout;

/// Construction-time settings for [`ChartEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub insets: PlotInsets,
    pub tooltip: TooltipLayout,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            insets: PlotInsets::default(),
            tooltip: TooltipLayout::default(),
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_tooltip_layout(mut self, tooltip: TooltipLayout) -> Self {
        self.tooltip = tooltip;
        self
    }
}
