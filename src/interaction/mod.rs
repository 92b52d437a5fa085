//! Pointer interaction: hover inspection and drag-to-pan.
//!
//! Hover and drag are modeled as one state machine so a tooltip can never be
//! shown mid-drag; the engine drives the transitions from pointer events.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::viewport::clamp_to;
use crate::core::{PixelPoint, PlotInsets, TimeWindow, Viewport};

/// Hovered point plus the clamped tooltip position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub point: PixelPoint,
    pub tooltip_left: f64,
    pub tooltip_top: f64,
}

/// An in-progress drag gesture.
///
/// `origin_anchor_end` is the effective window end at pointer-down, with live
/// mode already resolved to the newest timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub origin_x: f64,
    pub origin_anchor_end: f64,
}

impl DragGesture {
    /// New frozen window end for the current pointer position.
    ///
    /// Pixel deltas convert to time through the window span over the drawable
    /// width; the result is clamped so the window never leaves the data range.
    #[must_use]
    pub fn pan_target(
        self,
        pointer_x: f64,
        window: TimeWindow,
        full: TimeWindow,
        viewport: Viewport,
        insets: PlotInsets,
    ) -> f64 {
        let delta_x = pointer_x - self.origin_x;
        let ms_per_px = window.span() / insets.drawable_width(viewport);
        let next_end = self.origin_anchor_end - delta_x * ms_per_px;
        clamp_to(next_end, full.start + window.span(), full.end)
    }
}

/// Current pointer interaction state.
///
/// Hovering and dragging are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PointerState {
    #[default]
    Idle,
    Hovering(HoverState),
    Dragging(DragGesture),
}

impl PointerState {
    #[must_use]
    pub fn hover(&self) -> Option<&HoverState> {
        match self {
            Self::Hovering(hover) => Some(hover),
            _ => None,
        }
    }

    #[must_use]
    pub fn drag(&self) -> Option<DragGesture> {
        match self {
            Self::Dragging(gesture) => Some(*gesture),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Finds the projected point whose x-coordinate is closest to the pointer.
///
/// Linear scan; ties keep the first point in render order.
#[must_use]
pub fn locate_nearest(points: &[PixelPoint], pointer_x: f64) -> Option<&PixelPoint> {
    points
        .iter()
        .min_by_key(|point| OrderedFloat((point.x - pointer_x).abs()))
}

/// Tooltip placement offsets and clamp rails, in pixels.
///
/// Defaults keep the box clear of the hovered point and fully inside the
/// canvas regardless of where the point sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub offset_x: f64,
    pub offset_y: f64,
    pub min_left: f64,
    pub right_reserve: f64,
    pub min_top: f64,
    pub bottom_reserve: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            offset_y: -60.0,
            min_left: 70.0,
            right_reserve: 120.0,
            min_top: 8.0,
            bottom_reserve: 72.0,
        }
    }
}

impl TooltipLayout {
    /// Clamped `(left, top)` for a tooltip anchored at the given point.
    #[must_use]
    pub fn place(
        self,
        point: PixelPoint,
        viewport: Viewport,
        insets: PlotInsets,
    ) -> (f64, f64) {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let left = clamp_to(
            point.x + self.offset_x,
            insets.x + self.min_left,
            width - insets.x - self.right_reserve,
        );
        let top = clamp_to(
            point.y + self.offset_y,
            self.min_top,
            height - self.bottom_reserve,
        );
        (left, top)
    }
}
