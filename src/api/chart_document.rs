use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, ReservedSpace};

use super::axis_config::{AxisOptions, AxisStyle};

/// Vertical split of the chart into stacked plot rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitOptions {
    pub plot_count: usize,
    pub gap_px: f64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            plot_count: 1,
            gap_px: 10.0,
        }
    }
}

/// The declarative input to one layout pass.
///
/// Owned by the caller and treated as read-only; every pass produces a
/// fresh, fully independent frame with no aliasing back into the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub bounds: ChartBounds,
    /// Space already claimed by the legend/title collaborators.
    pub reserved: ReservedSpace,
    pub split: SplitOptions,
    pub style: AxisStyle,
    pub x_axis: AxisOptions,
    pub y_axes: Vec<AxisOptions>,
}

impl ChartDocument {
    #[must_use]
    pub fn new(bounds: ChartBounds, x_axis: AxisOptions) -> Self {
        Self {
            bounds,
            reserved: ReservedSpace::default(),
            split: SplitOptions::default(),
            style: AxisStyle::default(),
            x_axis,
            y_axes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisOptions) -> Self {
        self.y_axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_reserved(mut self, reserved: ReservedSpace) -> Self {
        self.reserved = reserved;
        self
    }

    #[must_use]
    pub fn with_split(mut self, split: SplitOptions) -> Self {
        self.split = split;
        self
    }
}
