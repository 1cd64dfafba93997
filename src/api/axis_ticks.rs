/// One tick candidate: a domain value paired with its pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TickCandidate {
    pub value: f64,
    pub position: f64,
}

impl TickCandidate {
    pub(super) fn new(value: f64, position: f64) -> Self {
        Self { value, position }
    }
}

/// Initial tick count to request for an extent before any thinning.
pub(super) fn natural_tick_count(extent_px: f64, min_spacing_px: f64) -> usize {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return 0;
    }
    if !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return 1;
    }
    ((extent_px / min_spacing_px).floor() as usize + 1).min(50)
}

/// Smallest pixel gap between consecutive candidates, assuming axis order.
pub(super) fn min_adjacent_spacing(candidates: &[TickCandidate]) -> f64 {
    let mut best = f64::INFINITY;
    for pair in candidates.windows(2) {
        let gap = (pair[1].position - pair[0].position).abs();
        if gap.is_finite() {
            best = best.min(gap);
        }
    }
    best
}

/// Keeps every `stride`-th candidate, always including the first.
pub(super) fn stride_thin(candidates: &[TickCandidate], stride: usize) -> Vec<TickCandidate> {
    candidates
        .iter()
        .copied()
        .step_by(stride.max(1))
        .collect()
}

/// Thins a full candidate list by increasing stride until spacing fits.
///
/// Terminates at the last list still holding two or more ticks even when
/// its spacing stays below the requirement; thinning below one tick is
/// meaningless.
pub(super) fn stride_thin_until_spaced(
    candidates: &[TickCandidate],
    min_spacing_px: f64,
) -> Vec<TickCandidate> {
    if candidates.len() <= 1 {
        return candidates.to_vec();
    }

    let mut last_stable = candidates.to_vec();
    for stride in 2..=candidates.len() {
        if min_adjacent_spacing(&last_stable) >= min_spacing_px {
            return last_stable;
        }
        let thinned = stride_thin(candidates, stride);
        if thinned.len() < 2 {
            tracing::debug!(
                stride,
                candidates = candidates.len(),
                "stride thinning exhausted before reaching target spacing"
            );
            return last_stable;
        }
        last_stable = thinned;
    }
    last_stable
}
