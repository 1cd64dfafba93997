use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A band scale mapping discrete categories to evenly spaced pixel slots.
///
/// Each category owns one slot; positions refer to slot centers. An empty
/// category list is valid and produces no ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    categories: Vec<String>,
    range_start: f64,
    range_end: f64,
}

impl BandScale {
    pub fn new(categories: Vec<String>, range: (f64, f64)) -> ChartResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            categories,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Width of one category slot in pixels; zero when there are no categories.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }
        (self.range_end - self.range_start) / (self.categories.len() as f64)
    }

    /// Pixel position of a category slot center.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        let bandwidth = self.bandwidth();
        self.range_start + bandwidth * (index as f64 + 0.5)
    }

    /// Returns the category slot containing a pixel coordinate, if any.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> Option<usize> {
        let bandwidth = self.bandwidth();
        if bandwidth == 0.0 {
            return None;
        }
        let slot = ((pixel - self.range_start) / bandwidth).floor();
        if slot < 0.0 || slot >= self.categories.len() as f64 {
            return None;
        }
        Some(slot as usize)
    }

    #[must_use]
    pub fn tick_indices(&self) -> Vec<usize> {
        (0..self.categories.len()).collect()
    }
}
