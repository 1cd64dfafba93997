use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_millis;
use crate::core::scale::ordered;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for fitting a time domain from data extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomainTuning {
    pub max_padding_ratio: f64,
    pub min_span_millis: f64,
}

impl Default for TimeDomainTuning {
    fn default() -> Self {
        Self {
            max_padding_ratio: 0.0,
            min_span_millis: 1_000.0,
        }
    }
}

impl TimeDomainTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.max_padding_ratio.is_finite() || self.max_padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "time domain padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_millis.is_finite() || self.min_span_millis <= 0.0 {
            return Err(ChartError::InvalidData(
                "time domain min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Time axis model with separate full and visible ranges, mapped to pixels.
///
/// `full_*` tracks the raw fitted data range in unix milliseconds.
/// `visible_*` reflects padding and externally driven zoom-state
/// restrictions; all mapping runs against the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start_ms: f64,
    full_end_ms: f64,
    visible_start_ms: f64,
    visible_end_ms: f64,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    /// Creates a scale with matching full and visible ranges.
    pub fn new(start_ms: f64, end_ms: f64, range: (f64, f64)) -> ChartResult<Self> {
        let normalized = normalize_domain(start_ms, end_ms, 1_000.0)?;
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "time scale range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            full_start_ms: normalized.0,
            full_end_ms: normalized.1,
            visible_start_ms: normalized.0,
            visible_end_ms: normalized.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Fits the domain from data timestamps, applying fractional padding.
    pub fn from_timestamps(
        timestamps: &[DateTime<Utc>],
        range: (f64, f64),
        tuning: TimeDomainTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        if timestamps.is_empty() {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = i64::MAX;
        let mut max = i64::MIN;
        for time in timestamps {
            let millis = datetime_to_unix_millis(*time);
            min = min.min(millis);
            max = max.max(millis);
        }

        let (start, end) = normalize_domain(min as f64, max as f64, tuning.min_span_millis)?;
        let padding = (end - start) * tuning.max_padding_ratio;
        Self::new(start, end + padding, range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.visible_start_ms, self.visible_end_ms)
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start_ms, self.full_end_ms)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Applies an externally driven zoom-state restriction.
    pub fn set_visible_range(&mut self, start_ms: f64, end_ms: f64) -> ChartResult<()> {
        let normalized = normalize_domain(start_ms, end_ms, 1.0)?;
        self.visible_start_ms = normalized.0;
        self.visible_end_ms = normalized.1;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start_ms = self.full_start_ms;
        self.visible_end_ms = self.full_end_ms;
    }

    #[must_use]
    pub fn position(self, millis: f64) -> f64 {
        let span = self.visible_end_ms - self.visible_start_ms;
        let normalized = (millis - self.visible_start_ms) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.visible_start_ms;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.visible_start_ms + normalized * (self.visible_end_ms - self.visible_start_ms)
    }

    /// Evenly spaced fallback ticks in milliseconds.
    ///
    /// Calendar-aware tick selection lives upstream; this granularity is
    /// only used when no calendar interval fits the visible span.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let (lo, hi) = ordered(self.visible_start_ms, self.visible_end_ms);
        if count == 1 {
            return vec![lo];
        }
        let span = hi - lo;
        let denominator = (count - 1) as f64;
        (0..count)
            .map(|index| lo + span * (index as f64) / denominator)
            .collect()
    }
}

fn normalize_domain(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "time domain must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok(ordered(start, end))
}
