use crate::core::{BandScale, LinearScale, LogScale, TimeScale};

/// The scale behind one axis, tagged by axis kind.
///
/// Every operation dispatches through a single exhaustive match so adding a
/// scale kind fails to compile until each operation handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    Log(LogScale),
    Time(TimeScale),
    Band(BandScale),
}

impl AxisScale {
    /// Domain endpoints in value space (category index space for bands).
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.domain(),
            Self::Log(scale) => scale.domain(),
            Self::Time(scale) => scale.domain(),
            Self::Band(scale) => (0.0, scale.len() as f64),
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Log(scale) => scale.range(),
            Self::Time(scale) => scale.range(),
            Self::Band(scale) => scale.range(),
        }
    }

    /// Maps a domain value (or category index) to a pixel coordinate.
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.position(value),
            Self::Log(scale) => scale.position(value),
            Self::Time(scale) => scale.position(value),
            Self::Band(scale) => scale.position(value as usize),
        }
    }

    /// Maps a pixel coordinate back into the domain, when meaningful.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> Option<f64> {
        match self {
            Self::Linear(scale) => Some(scale.invert(pixel)),
            Self::Log(scale) => Some(scale.invert(pixel)),
            Self::Time(scale) => Some(scale.invert(pixel)),
            Self::Band(scale) => scale.invert(pixel).map(|index| index as f64),
        }
    }

    /// Candidate tick values for a requested count.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(scale) => scale.ticks(count),
            Self::Log(scale) => scale.ticks(count),
            Self::Time(scale) => scale.ticks(count),
            Self::Band(scale) => scale
                .tick_indices()
                .into_iter()
                .map(|index| index as f64)
                .collect(),
        }
    }

    /// Slot width for band scales; `None` for continuous scales.
    #[must_use]
    pub fn bandwidth(&self) -> Option<f64> {
        match self {
            Self::Linear(_) | Self::Log(_) | Self::Time(_) => None,
            Self::Band(scale) => Some(scale.bandwidth()),
        }
    }

    #[must_use]
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Self::Band(scale) => Some(scale),
            Self::Linear(_) | Self::Log(_) | Self::Time(_) => None,
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<&TimeScale> {
        match self {
            Self::Time(scale) => Some(scale),
            Self::Linear(_) | Self::Log(_) | Self::Band(_) => None,
        }
    }
}
