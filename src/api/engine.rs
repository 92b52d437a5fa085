use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    Sample, StatsPayload, TimeWindow, Viewport, ViewportState, WindowedSeries, canonical_series,
    compute_window, format_timestamp, project_visible,
};
use crate::error::{ChartError, ChartResult};
use crate::core::PlotInsets;
use crate::interaction::{DragGesture, HoverState, PointerState, TooltipLayout, locate_nearest};
use crate::render::{HoverOverlay, RenderFrame, Renderer};

use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// Owns the canonical series, the zoom/pan viewport state, and the pointer
/// state machine; produces deterministic [`RenderFrame`]s for the renderer.
/// The series is replaced wholesale per poll tick while viewport state
/// persists, so a refreshing feed never fights user interaction.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    insets: PlotInsets,
    tooltip: TooltipLayout,
    view: ViewportState,
    pointer: PointerState,
    series: Vec<Sample>,
    metadata: IndexMap<String, String>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            insets: config.insets,
            tooltip: config.tooltip,
            view: ViewportState::default(),
            pointer: PointerState::Idle,
            series: Vec::new(),
            metadata: IndexMap::new(),
        })
    }

    /// Normalizes a stats payload and replaces the series wholesale.
    ///
    /// Malformed rows are dropped at the ingestion boundary; this call never
    /// fails and never touches viewport state. A live tooltip is cleared
    /// because its point may no longer exist; an active drag is kept.
    pub fn apply_stats(&mut self, payload: &StatsPayload) {
        let raw = payload.rows().len();
        self.series = canonical_series(payload);
        debug!(raw, kept = self.series.len(), "applied stats payload");

        if matches!(self.pointer, PointerState::Hovering(_)) {
            self.pointer = PointerState::Idle;
        }
    }

    /// Resize input event: the host reports new canvas dimensions here.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        if matches!(self.pointer, PointerState::Hovering(_)) {
            self.pointer = PointerState::Idle;
        }
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// Back to 1:1 zoom and live auto-follow.
    pub fn zoom_reset(&mut self) {
        self.view.reset();
        self.pointer = PointerState::Idle;
    }

    pub fn follow_live(&mut self) {
        self.view.follow_live();
        self.pointer = PointerState::Idle;
    }

    pub fn pointer_down(&mut self, x: f64) {
        if self.series.is_empty() {
            return;
        }
        self.pointer = PointerState::Dragging(DragGesture {
            origin_x: x,
            origin_anchor_end: self.view.effective_anchor_end(&self.series),
        });
    }

    pub fn pointer_move(&mut self, x: f64, _y: f64) {
        if self.series.is_empty() {
            return;
        }

        let windowed = self.windowed();

        if let Some(gesture) = self.pointer.drag() {
            let target = gesture.pan_target(
                x,
                windowed.window,
                windowed.full,
                self.viewport,
                self.insets,
            );
            // Panning always freezes the window; live mode is re-entered only
            // through follow_live.
            self.view.pan_to(target);
            return;
        }

        let points = project_visible(&windowed.visible, self.viewport, self.insets);
        self.pointer = match locate_nearest(&points, x) {
            Some(point) => {
                let (tooltip_left, tooltip_top) =
                    self.tooltip.place(*point, self.viewport, self.insets);
                PointerState::Hovering(HoverState {
                    point: *point,
                    tooltip_left,
                    tooltip_top,
                })
            }
            None => PointerState::Idle,
        };
    }

    pub fn pointer_up(&mut self) {
        if self.pointer.is_dragging() {
            self.pointer = PointerState::Idle;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = PointerState::Idle;
    }

    /// Insertion-ordered presentation metadata (`label`, `unit`, ...).
    ///
    /// `unit` is appended to the tooltip value text when present.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    #[must_use]
    pub fn series(&self) -> &[Sample] {
        &self.series
    }

    /// Rows for the tabular view, newest first.
    #[must_use]
    pub fn table_rows(&self) -> Vec<Sample> {
        self.series.iter().rev().copied().collect()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.view.is_live()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    #[must_use]
    pub fn hover(&self) -> Option<&HoverState> {
        self.pointer.hover()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current visible window, derived from series and viewport state.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.windowed().window
    }

    /// Full windowing pass over the current series. Pure; recomputed per call.
    #[must_use]
    pub fn windowed(&self) -> WindowedSeries {
        compute_window(&self.series, self.view)
    }

    /// Builds the frame for the current state: projected visible points plus
    /// the hover overlay, or an empty frame when no data is visible.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let windowed = self.windowed();
        let points = project_visible(&windowed.visible, self.viewport, self.insets);
        let hover = self.pointer.hover().map(|hover| self.hover_overlay(hover));
        RenderFrame::new(self.viewport, points, hover)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn hover_overlay(&self, hover: &HoverState) -> HoverOverlay {
        let value_text = match self.metadata.get("unit") {
            Some(unit) => format!("{:.2} {unit}", hover.point.sample.v),
            None => format!("{:.2}", hover.point.sample.v),
        };
        HoverOverlay {
            point: hover.point,
            tooltip_left: hover.tooltip_left,
            tooltip_top: hover.tooltip_top,
            value_text,
            time_text: format_timestamp(hover.point.sample.t),
        }
    }
}
