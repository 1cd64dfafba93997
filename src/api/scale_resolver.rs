use crate::core::{AxisScale, BandScale, LinearScale, LogScale, TimeScale};
use crate::error::ChartResult;

use super::axis_config::{AxisKind, AxisOptions};

/// Builds the scale backing one axis for a given pixel range.
///
/// Domain endpoints come from the data extremes, overridden by explicit
/// `min`/`max`, with fractional `max_padding` applied past the data
/// maximum. A collapsed domain is widened symmetrically so downstream
/// layout sees a usable span instead of erroring.
pub(super) fn resolve_axis_scale(axis: &AxisOptions, range: (f64, f64)) -> ChartResult<AxisScale> {
    match &axis.kind {
        AxisKind::Linear { data_min, data_max } => {
            let (min, max) = resolved_domain(axis, *data_min, *data_max);
            Ok(AxisScale::Linear(LinearScale::new((min, max), range)?))
        }
        AxisKind::Logarithmic {
            data_min,
            data_max,
            base,
        } => {
            let (min, max) = resolved_domain(axis, *data_min, *data_max);
            Ok(AxisScale::Log(LogScale::with_base((min, max), range, *base)?))
        }
        AxisKind::DateTime {
            data_min_ms,
            data_max_ms,
            ..
        } => {
            let (min, max) = resolved_domain(axis, *data_min_ms as f64, *data_max_ms as f64);
            Ok(AxisScale::Time(TimeScale::new(min, max, range)?))
        }
        AxisKind::Category { categories } => {
            Ok(AxisScale::Band(BandScale::new(categories.clone(), range)?))
        }
    }
}

fn resolved_domain(axis: &AxisOptions, data_min: f64, data_max: f64) -> (f64, f64) {
    let mut min = axis.min.unwrap_or(data_min);
    let mut max = axis.max.unwrap_or_else(|| {
        let span = (data_max - data_min).abs();
        data_max + span * axis.max_padding
    });
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    if min == max {
        // Widen a collapsed domain; half a unit each side keeps single-value
        // data centered.
        min -= 0.5;
        max += 0.5;
    }
    (min, max)
}
