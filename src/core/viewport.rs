//! Zoom/pan viewport over the canonical series.
//!
//! The viewport is defined relative to the full data span, so it keeps
//! working unchanged while the poller swaps the series underneath it.

use serde::{Deserialize, Serialize};

use crate::core::Sample;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 50.0;
/// Multiplicative step used by the zoom-in/zoom-out controls.
pub const ZOOM_STEP: f64 = 1.5;

/// Right edge of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnchorEnd {
    /// Auto-follow: the right edge tracks the newest sample.
    Live,
    /// Frozen at a concrete timestamp after the user panned or dragged.
    Fixed(f64),
}

/// User-controlled zoom factor and pan anchor.
///
/// `zoom = 1` shows the full span; larger values narrow the window to
/// `full_span / zoom`. State survives poll ticks and re-renders; only the
/// transition methods below mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    zoom: f64,
    anchor_end: AnchorEnd,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            anchor_end: AnchorEnd::Live,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn anchor_end(self) -> AnchorEnd {
        self.anchor_end
    }

    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self.anchor_end, AnchorEnd::Live)
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Clamps into `[MIN_ZOOM, MAX_ZOOM]`; non-finite input resets to 1.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_finite() {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            MIN_ZOOM
        };
    }

    /// Freezes the window's right edge at a concrete timestamp.
    pub fn pan_to(&mut self, end: f64) {
        self.anchor_end = AnchorEnd::Fixed(end);
    }

    pub fn follow_live(&mut self) {
        self.anchor_end = AnchorEnd::Live;
    }

    /// Back to 1:1 zoom and auto-follow.
    pub fn reset(&mut self) {
        self.zoom = MIN_ZOOM;
        self.anchor_end = AnchorEnd::Live;
    }

    /// Resolves `Live` to the newest timestamp, for drag-start capture.
    #[must_use]
    pub fn effective_anchor_end(self, series: &[Sample]) -> f64 {
        match self.anchor_end {
            AnchorEnd::Fixed(end) => end,
            AnchorEnd::Live => series.last().map_or(0.0, |sample| sample.t as f64),
        }
    }
}

/// Inclusive `[start, end]` time range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }
}

/// Result of windowing the full series under a viewport state.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    /// Raw `[min_t, max_t]` range of the full series.
    pub full: TimeWindow,
    /// Derived visible window, clamped inside `full`.
    pub window: TimeWindow,
    /// Samples whose time falls inside `window`, in series order.
    pub visible: Vec<Sample>,
}

impl WindowedSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Derives the visible window and subset for the current viewport state.
///
/// Pure and idempotent. An empty series yields a default span-1 window so
/// downstream math never divides by zero. The window span is always
/// `full_span / zoom`, and the window stays inside the full data range.
#[must_use]
pub fn compute_window(series: &[Sample], state: ViewportState) -> WindowedSeries {
    let Some((min_t, max_t)) = time_extent(series) else {
        let window = TimeWindow {
            start: 0.0,
            end: 1.0,
        };
        return WindowedSeries {
            full: window,
            window,
            visible: Vec::new(),
        };
    };

    let full_span = (max_t - min_t).max(1.0);
    let desired_span = full_span / state.zoom();

    let end_candidate = match state.anchor_end() {
        AnchorEnd::Live => max_t,
        AnchorEnd::Fixed(end) => end,
    };
    let window_end = clamp_to(end_candidate, min_t + desired_span, max_t);
    let window = TimeWindow {
        start: window_end - desired_span,
        end: window_end,
    };

    let visible = series
        .iter()
        .copied()
        .filter(|sample| window.contains(sample.t as f64))
        .collect();

    WindowedSeries {
        full: TimeWindow {
            start: min_t,
            end: max_t,
        },
        window,
        visible,
    }
}

fn time_extent(series: &[Sample]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in series {
        let t = sample.t as f64;
        min = min.min(t);
        max = max.max(t);
    }
    (!series.is_empty()).then_some((min, max))
}

/// Clamp where the lower bound wins when the bounds cross.
///
/// A single-sample series produces `lo > hi` (minimum span exceeds the data
/// range); the window then sticks to the left edge instead of panicking the
/// way `f64::clamp` would.
pub(crate) fn clamp_to(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
