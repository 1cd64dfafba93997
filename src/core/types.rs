use chrono::{DateTime, Utc};

use crate::core::primitives::datetime_to_unix_millis;
use crate::error::{ChartError, ChartResult};

/// Total pixel surface available to the chart before any space is reserved.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartBounds {
    pub width: f64,
    pub height: f64,
}

impl ChartBounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Per-edge space already claimed by external collaborators (legend, chart
/// title). The axis engine subtracts these before computing axis extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ReservedSpace {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ReservedSpace {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "reserved space `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// A half-open pixel interval along one axis direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        (self.end - self.start).abs()
    }

    #[must_use]
    pub fn contains(self, px: f64) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        px >= lo && px <= hi
    }
}

/// A raw domain value carried on a tick, tagged by axis kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainValue {
    Number(f64),
    TimestampMillis(i64),
    /// Index into the category list of a band scale.
    Category(usize),
}

impl DomainValue {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::TimestampMillis(millis) => millis as f64,
            Self::Category(index) => index as f64,
        }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::TimestampMillis(datetime_to_unix_millis(time))
    }
}
