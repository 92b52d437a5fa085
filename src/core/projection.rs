//! Data-space to pixel-space projection for the visible subset.

use serde::{Deserialize, Serialize};

use crate::core::{PlotInsets, Sample, Viewport};

/// A sample together with its projected pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
    pub sample: Sample,
}

/// Projects the visible subset into pixel space.
///
/// Both axes are scaled over the visible subset only, so whatever window is
/// currently shown exactly fills the drawable area: the earliest visible
/// sample lands at `insets.x`, the latest at `width - insets.x`, and the
/// value axis stretches the visible min/max over the drawable height.
///
/// Degenerate spans have defined fallbacks: a single distinct timestamp maps
/// to the left inset, and a flat value range draws at mid-height.
#[must_use]
pub fn project_visible(
    visible: &[Sample],
    viewport: Viewport,
    insets: PlotInsets,
) -> Vec<PixelPoint> {
    if visible.is_empty() {
        return Vec::new();
    }

    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for sample in visible {
        let t = sample.t as f64;
        min_t = min_t.min(t);
        max_t = max_t.max(t);
        min_v = min_v.min(sample.v);
        max_v = max_v.max(sample.v);
    }

    let span_t = (max_t - min_t).max(1.0);
    let span_v = max_v - min_v;
    let height = f64::from(viewport.height);
    let drawable_w = insets.drawable_width(viewport);
    let drawable_h = insets.drawable_height(viewport);

    visible
        .iter()
        .map(|sample| {
            let x = insets.x + (sample.t as f64 - min_t) / span_t * drawable_w;
            let y = if span_v == 0.0 {
                height / 2.0
            } else {
                height - insets.y - (sample.v - min_v) / span_v * drawable_h
            };
            PixelPoint {
                x,
                y,
                sample: *sample,
            }
        })
        .collect()
}
