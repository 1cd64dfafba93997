use crate::core::AxisScale;

use super::axis_ticks::{
    TickCandidate, min_adjacent_spacing, natural_tick_count, stride_thin_until_spaced,
};

/// Selects tick candidates for a continuous (linear/log/time) scale.
///
/// Starts from the natural tick count for the extent and regenerates with
/// one fewer tick while consecutive ticks sit closer than the required
/// spacing. Regeneration that collapses to nothing (pathological log
/// domains) falls back to stride-thinning the first full candidate list.
pub(super) fn select_continuous_ticks(
    scale: &AxisScale,
    extent_px: f64,
    min_spacing_px: f64,
) -> Vec<TickCandidate> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Vec::new();
    }

    let natural = natural_tick_count(extent_px, min_spacing_px);
    if natural == 0 {
        return Vec::new();
    }

    let first_full = candidates_for_count(scale, natural);
    if first_full.len() <= 1 {
        return first_full;
    }

    let mut count = natural;
    loop {
        let candidates = if count == natural {
            first_full.clone()
        } else {
            candidates_for_count(scale, count)
        };

        if candidates.is_empty() {
            tracing::debug!(count, "tick regeneration collapsed; stride-thinning instead");
            return stride_thin_until_spaced(&first_full, min_spacing_px);
        }
        if candidates.len() == 1 {
            return candidates;
        }
        if min_adjacent_spacing(&candidates) >= min_spacing_px {
            return candidates;
        }
        if count == 1 {
            // No stable multi-tick solution; the last list stands.
            return candidates;
        }
        count -= 1;
    }
}

/// Selects tick candidates for a band scale: every category slot center,
/// stride-thinned when slots sit closer than the required spacing.
pub(super) fn select_band_ticks(scale: &AxisScale, min_spacing_px: f64) -> Vec<TickCandidate> {
    let Some(band) = scale.as_band() else {
        return Vec::new();
    };
    let all: Vec<TickCandidate> = band
        .tick_indices()
        .into_iter()
        .map(|index| TickCandidate::new(index as f64, band.position(index)))
        .collect();
    if all.len() <= 1 {
        return all;
    }
    stride_thin_until_spaced(&all, min_spacing_px)
}

fn candidates_for_count(scale: &AxisScale, count: usize) -> Vec<TickCandidate> {
    let mut candidates: Vec<TickCandidate> = scale
        .ticks(count)
        .into_iter()
        .filter(|value| value.is_finite())
        .map(|value| TickCandidate::new(value, scale.position(value)))
        .filter(|candidate| candidate.position.is_finite())
        .collect();
    candidates.sort_by(|left, right| left.position.total_cmp(&right.position));
    candidates
}
