use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One telemetry reading: epoch-millisecond timestamp plus a measured value.
///
/// Normalization guarantees `t > 0` and `v` finite; code past the ingestion
/// boundary relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: i64,
    pub v: f64,
}

impl Sample {
    #[must_use]
    pub fn new(t: i64, v: f64) -> Self {
        Self { t, v }
    }
}

/// Horizontal/vertical padding between the viewport edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub x: f64,
    pub y: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self { x: 12.0, y: 16.0 }
    }
}

impl PlotInsets {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Width of the drawable region inside the horizontal insets, floored at 1.
    #[must_use]
    pub fn drawable_width(self, viewport: Viewport) -> f64 {
        (f64::from(viewport.width) - self.x * 2.0).max(1.0)
    }

    #[must_use]
    pub fn drawable_height(self, viewport: Viewport) -> f64 {
        (f64::from(viewport.height) - self.y * 2.0).max(1.0)
    }
}

/// Formats an epoch-millisecond timestamp for tooltips and table rows.
///
/// Out-of-range timestamps fall back to the raw number so display code never
/// fails on hostile data.
#[must_use]
pub fn format_timestamp(t: i64) -> String {
    match DateTime::from_timestamp_millis(t) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => t.to_string(),
    }
}
