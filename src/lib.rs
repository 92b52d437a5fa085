//! livechart: live telemetry chart viewport engine.
//!
//! Normalizes polled sample payloads into a canonical time series, maintains
//! a zoomable/pannable viewport over it, projects data into pixel space, and
//! resolves pointer interaction (hover, drag-to-pan) — independent of any
//! particular drawing backend or transport.

pub mod api;
pub mod core;
pub mod error;
pub mod fetch;
pub mod interaction;
pub mod poll;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
pub use poll::Poller;
