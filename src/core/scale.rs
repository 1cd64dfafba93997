use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A linear mapping from a continuous domain to a pixel range.
///
/// The pixel range may be inverted (start > end) for Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "linear scale domain must be finite and non-empty".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "linear scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to a pixel coordinate.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to a domain value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Returns "nice" tick values covering the domain.
    ///
    /// The step is the smallest 1/2/5 multiple of a power of ten producing
    /// at most `count` ticks. Requesting fewer ticks always yields a list
    /// no longer than before, which the spacing retry loop relies on.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        if count == 1 {
            return vec![lo];
        }

        let step = nice_step((hi - lo) / (count as f64));
        if step <= 0.0 || !step.is_finite() {
            return vec![lo];
        }

        let first = (lo / step).ceil() * step;
        let mut ticks = Vec::new();
        let mut index = 0u32;
        loop {
            let value = first + step * f64::from(index);
            if value > hi + step * 1e-9 {
                break;
            }
            // Snap near-zero steps like -1.1102e-16 back to exact zero.
            let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
            ticks.push(value);
            index += 1;
            if index > 10_000 {
                break;
            }
        }
        ticks
    }
}

/// Rounds a raw step up to the nearest 1/2/5 multiple of a power of ten.
pub(crate) fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 0.0;
    }

    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return raw_step;
    }

    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

pub(crate) fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
