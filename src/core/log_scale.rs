use serde::{Deserialize, Serialize};

use crate::core::scale::ordered;
use crate::error::{ChartError, ChartResult};

/// A logarithmic mapping from a strictly positive domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    base: f64,
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::with_base(domain, range, 10.0)
    }

    pub fn with_base(domain: (f64, f64), range: (f64, f64), base: f64) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "log scale domain must be finite and non-empty".to_owned(),
            ));
        }
        if domain.0 <= 0.0 || domain.1 <= 0.0 {
            return Err(ChartError::InvalidData(
                "log scale domain must be strictly positive".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "log scale range must be finite".to_owned(),
            ));
        }
        if !base.is_finite() || base <= 1.0 {
            return Err(ChartError::InvalidData(
                "log scale base must be finite and > 1".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            base,
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

    #[must_use]
    pub fn base(self) -> f64 {
        self.base
    }

    fn log(self, value: f64) -> f64 {
        value.ln() / self.base.ln()
    }

    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        if value <= 0.0 {
            return self.range_start;
        }
        let log_start = self.log(self.domain_start);
        let log_end = self.log(self.domain_end);
        let normalized = (self.log(value) - log_start) / (log_end - log_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        let log_start = self.log(self.domain_start);
        let log_end = self.log(self.domain_end);
        self.base.powf(log_start + normalized * (log_end - log_start))
    }

    /// Returns tick values for the domain.
    ///
    /// Domains spanning at least one full power of the base tick at powers
    /// (strided down when `count` is smaller than the power count). Narrower
    /// domains fall back to linear subdivision, which can collapse to an
    /// empty list at low counts; callers handle that with stride thinning
    /// over their first full candidate list.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let (lo, hi) = ordered(self.domain_start, self.domain_end);

        let first_power = self.log(lo).ceil() as i32;
        let last_power = self.log(hi).floor() as i32;
        if last_power >= first_power {
            let powers: Vec<f64> = (first_power..=last_power)
                .map(|p| self.base.powi(p))
                .collect();
            if powers.len() <= count {
                return powers;
            }
            let stride = powers.len().div_ceil(count);
            return powers.into_iter().step_by(stride.max(1)).collect();
        }

        // Sub-decade domain: no power of the base falls inside it.
        linear_subdivision(lo, hi, count)
    }
}

fn linear_subdivision(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return Vec::new();
    }
    let step = crate::core::scale::nice_step((hi - lo) / (count as f64));
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let first = (lo / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut index = 0u32;
    loop {
        let value = first + step * f64::from(index);
        if value > hi + step * 1e-9 {
            break;
        }
        ticks.push(value);
        index += 1;
        if index > 10_000 {
            break;
        }
    }
    ticks
}
