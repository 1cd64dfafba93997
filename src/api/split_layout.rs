use crate::render::PlotRegion;

use super::chart_document::SplitOptions;

/// The vertical arrangement of stacked plot rows.
///
/// Regions are ordered top-to-bottom, never overlap, and together with the
/// gaps never exceed the available height.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSplit {
    regions: Vec<PlotRegion>,
    gap_px: f64,
}

impl PreparedSplit {
    /// Divides `available_height` below `top` into equal plot rows.
    ///
    /// A non-positive height yields zero-height regions at `top` so that
    /// downstream layout degrades to empty tick lists instead of erroring.
    #[must_use]
    pub fn prepare(top: f64, available_height: f64, options: SplitOptions) -> Self {
        let count = options.plot_count.max(1);
        let gap = options.gap_px.max(0.0);
        let available = available_height.max(0.0);

        let total_gap = gap * ((count - 1) as f64);
        let row_height = ((available - total_gap) / (count as f64)).max(0.0);

        let regions = (0..count)
            .map(|index| PlotRegion {
                top: top + (row_height + gap) * (index as f64),
                height: row_height,
            })
            .collect();

        Self {
            regions,
            gap_px: gap,
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[PlotRegion] {
        &self.regions
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap_px
    }

    #[must_use]
    pub fn region(&self, plot_index: usize) -> Option<PlotRegion> {
        self.regions.get(plot_index).copied()
    }

    /// Bottom edge of the last plot row.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.regions
            .last()
            .map(|region| region.top + region.height)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::chart_document::SplitOptions;
    use super::PreparedSplit;

    #[test]
    fn regions_are_ordered_and_disjoint() {
        let split = PreparedSplit::prepare(
            10.0,
            310.0,
            SplitOptions {
                plot_count: 3,
                gap_px: 5.0,
            },
        );
        let regions = split.regions();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].height, 100.0);
        for pair in regions.windows(2) {
            assert!(pair[1].top >= pair[0].top + pair[0].height);
        }
        assert!(split.bottom() <= 10.0 + 310.0 + 1e-9);
    }

    #[test]
    fn zero_height_degrades_to_empty_regions() {
        let split = PreparedSplit::prepare(0.0, 0.0, SplitOptions::default());
        assert_eq!(split.regions().len(), 1);
        assert_eq!(split.regions()[0].height, 0.0);
    }
}
