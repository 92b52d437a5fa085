//! Fetch collaborator contract for the polling pipeline.
//!
//! The engine itself never performs I/O; a [`TelemetrySource`] produces the
//! loosely-shaped payloads the normalizer understands. The optional
//! `http-source` feature provides a reqwest-backed implementation matching
//! the reference HTTP API (`/api/stats`, `/api/current`).

use async_trait::async_trait;

use crate::core::{CurrentPayload, StatsPayload};
use crate::error::ChartResult;

/// Query time range, relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKey {
    LastHour,
    LastDay,
    LastMonth,
}

impl RangeKey {
    #[must_use]
    pub fn duration_ms(self) -> i64 {
        match self {
            Self::LastHour => 60 * 60 * 1000,
            Self::LastDay => 24 * 60 * 60 * 1000,
            Self::LastMonth => 30 * 24 * 60 * 60 * 1000,
        }
    }
}

/// Server-side aggregation bucket selector. The aggregation itself is the
/// server's business; the client only names it in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Raw,
    Hourly,
    Daily,
}

impl Bucket {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }
}

/// Async data source polled for series data and the latest single reading.
///
/// Implementations must surface non-2xx responses and transport failures as
/// errors; the poller treats an `Err` as a skipped tick, never as data.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn fetch_stats(&self) -> ChartResult<StatsPayload>;
    async fn fetch_current(&self) -> ChartResult<CurrentPayload>;
}

#[cfg(feature = "http-source")]
pub use http::HttpTelemetrySource;

#[cfg(feature = "http-source")]
mod http {
    use async_trait::async_trait;
    use chrono::Utc;

    use super::{Bucket, RangeKey, TelemetrySource};
    use crate::core::{CurrentPayload, StatsPayload};
    use crate::error::ChartResult;

    /// HTTP polling fetcher against the reference telemetry API.
    #[derive(Debug, Clone)]
    pub struct HttpTelemetrySource {
        client: reqwest::Client,
        base_url: String,
        bucket: Bucket,
        range: RangeKey,
    }

    impl HttpTelemetrySource {
        #[must_use]
        pub fn new(base_url: impl Into<String>, bucket: Bucket, range: RangeKey) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
                bucket,
                range,
            }
        }

        fn stats_url(&self) -> String {
            let end = Utc::now().timestamp_millis();
            let start = end - self.range.duration_ms();
            format!(
                "{}/api/stats?bucket={}&start={start}&end={end}",
                self.base_url,
                self.bucket.as_str(),
            )
        }
    }

    #[async_trait]
    impl TelemetrySource for HttpTelemetrySource {
        async fn fetch_stats(&self) -> ChartResult<StatsPayload> {
            let payload = self
                .client
                .get(self.stats_url())
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            Ok(payload)
        }

        async fn fetch_current(&self) -> ChartResult<CurrentPayload> {
            let payload = self
                .client
                .get(format!("{}/api/current", self.base_url))
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            Ok(payload)
        }
    }
}
