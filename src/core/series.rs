//! Best-effort normalization of loosely-shaped telemetry payloads.
//!
//! The stats endpoint is not contractually fixed: the row array can live under
//! `data`, `samples`, or `rows`, and each row is either a `[time, value]` pair
//! or a record with one of several key spellings. Everything that cannot be
//! coerced into a finite sample is dropped silently; normalization never
//! raises.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::Sample;

/// Record time keys, first coercible match wins.
const TIME_KEYS: [&str; 4] = ["epoch_ms", "time", "ts", "timestamp"];

/// Record value keys, first coercible match wins. A record carrying none of
/// these still yields a sample with `v = 0.0`; some upstream payloads omit
/// the value field entirely.
const VALUE_KEYS: [&str; 3] = ["value", "val", "temperature"];

/// Stats response body as delivered by the polling fetcher.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatsPayload {
    pub bucket: Option<String>,
    data: Option<Vec<RawSample>>,
    samples: Option<Vec<RawSample>>,
    rows: Option<Vec<RawSample>>,
}

impl StatsPayload {
    /// Resolves the row array: `data` first, then `samples`, then `rows`.
    #[must_use]
    pub fn rows(&self) -> &[RawSample] {
        self.data
            .as_deref()
            .or(self.samples.as_deref())
            .or(self.rows.as_deref())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn from_rows(rows: Vec<RawSample>) -> Self {
        Self {
            bucket: None,
            data: Some(rows),
            samples: None,
            rows: None,
        }
    }
}

/// One row of a stats payload before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSample {
    /// `[time, value]` pair; elements may be numbers or numeric strings.
    Pair(Value, Value),
    /// Loose record; time/value resolved through the key priority lists.
    Record(Map<String, Value>),
    /// Anything else. Dropped at normalization.
    Other(Value),
}

impl RawSample {
    /// Coerces this row into a canonical sample, or `None` if malformed.
    #[must_use]
    pub fn to_sample(&self) -> Option<Sample> {
        let (t, v) = match self {
            Self::Pair(time, value) => (coerce_number(time)?, coerce_number(value)?),
            Self::Record(record) => {
                let t = TIME_KEYS
                    .iter()
                    .find_map(|key| record.get(*key).and_then(coerce_number))?;
                let v = match VALUE_KEYS
                    .iter()
                    .find_map(|key| record.get(*key).and_then(coerce_number))
                {
                    Some(v) => v,
                    // Entirely-absent value keys default to 0.0; a value key
                    // that is present but non-coercible drops the row. Nulls
                    // count as absent.
                    None if VALUE_KEYS
                        .iter()
                        .any(|key| record.get(*key).is_some_and(|v| !v.is_null())) =>
                    {
                        return None;
                    }
                    None => 0.0,
                };
                (t, v)
            }
            Self::Other(_) => return None,
        };

        if !t.is_finite() || t <= 0.0 || !v.is_finite() {
            return None;
        }

        Some(Sample::new(t as i64, v))
    }
}

/// Latest single reading, as served by the current-value endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentPayload {
    pub value: Option<f64>,
    pub epoch_ms: Option<i64>,
    pub time: Option<i64>,
}

impl CurrentPayload {
    /// Resolves the reading, preferring `epoch_ms` over `time` for the stamp.
    #[must_use]
    pub fn reading(&self) -> Option<Sample> {
        let v = self.value.filter(|v| v.is_finite())?;
        let t = self.epoch_ms.or(self.time).filter(|t| *t > 0)?;
        Some(Sample::new(t, v))
    }
}

/// Converts every well-formed row into a sample, dropping the rest.
///
/// Output order follows payload order; callers wanting the canonical series
/// must sort (see [`canonical_series`]).
#[must_use]
pub fn normalize_series(payload: &StatsPayload) -> Vec<Sample> {
    payload.rows().iter().filter_map(RawSample::to_sample).collect()
}

/// Normalizes and sorts ascending by time.
///
/// The sort is stable, so duplicate timestamps keep payload order and the
/// later row wins visually when drawn.
#[must_use]
pub fn canonical_series(payload: &StatsPayload) -> Vec<Sample> {
    let mut series = normalize_series(payload);
    series.sort_by_key(|sample| sample.t);
    series
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
