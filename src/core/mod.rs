pub mod projection;
pub mod series;
pub mod types;
pub mod viewport;

pub use projection::{PixelPoint, project_visible};
pub use series::{
    CurrentPayload, RawSample, StatsPayload, canonical_series, normalize_series,
};
pub use types::{PlotInsets, Sample, Viewport, format_timestamp};
pub use viewport::{
    AnchorEnd, MAX_ZOOM, MIN_ZOOM, TimeWindow, ViewportState, WindowedSeries, ZOOM_STEP,
    compute_window,
};
