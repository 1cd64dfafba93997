use smallvec::SmallVec;

use crate::measure::{TextMeasurer, TextStyle};

pub(super) const ELLIPSIS: &str = "…";

/// Display text plus the retained original when truncation occurred.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct EllipsizedText {
    pub display: String,
    pub full_text: Option<String>,
}

impl EllipsizedText {
    fn untouched(text: &str) -> Self {
        Self {
            display: text.to_owned(),
            full_text: None,
        }
    }
}

/// Truncates `text` with a trailing ellipsis until it fits `max_width_px`.
///
/// An already-fitting string comes back unchanged, so the operation is
/// idempotent. The longest fitting prefix is found by binary search over
/// the char count against the measurement backend.
pub(super) fn ellipsize_to_width(
    text: &str,
    max_width_px: f64,
    style: TextStyle,
    measurer: &dyn TextMeasurer,
) -> EllipsizedText {
    if text.is_empty() || !max_width_px.is_finite() {
        return EllipsizedText::untouched(text);
    }
    if measurer.measure(text, style).width <= max_width_px {
        return EllipsizedText::untouched(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let fits = |prefix_len: usize| {
        let mut candidate: String = chars[..prefix_len].iter().collect();
        candidate.push_str(ELLIPSIS);
        measurer.measure(&candidate, style).width <= max_width_px
    };

    let mut lo = 0usize;
    let mut hi = chars.len() - 1;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    let mut display: String = chars[..lo].iter().collect();
    display.push_str(ELLIPSIS);
    EllipsizedText {
        display,
        full_text: Some(text.to_owned()),
    }
}

/// Greedy word wrap into rows no wider than `max_width_px`.
///
/// A single word wider than the budget keeps its own row; words are never
/// split mid-glyph here (over-wide rows are ellipsized downstream).
pub(super) fn wrap_text_rows(
    text: &str,
    max_width_px: f64,
    style: TextStyle,
    measurer: &dyn TextMeasurer,
) -> SmallVec<[String; 2]> {
    let mut rows: SmallVec<[String; 2]> = SmallVec::new();
    if text.is_empty() {
        return rows;
    }
    if !max_width_px.is_finite() || max_width_px <= 0.0 {
        rows.push(text.to_owned());
        return rows;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measurer.measure(&candidate, style).width <= max_width_px {
            current = candidate;
        } else {
            rows.push(current);
            current = word.to_owned();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Horizontal width budget available to unrotated text so that its box,
/// projected through `rotation_deg`, stays within `allowed_width_px`.
///
/// Near-vertical text only occupies one line height horizontally, so no
/// truncation budget applies there.
pub(super) fn unrotated_width_budget(
    allowed_width_px: f64,
    line_height_px: f64,
    rotation_deg: f64,
) -> f64 {
    if rotation_deg == 0.0 {
        return allowed_width_px;
    }
    let theta = rotation_deg.to_radians();
    let cos = theta.cos().abs();
    let sin = theta.sin().abs();
    if cos < 1e-6 {
        return f64::INFINITY;
    }
    (allowed_width_px - line_height_px * sin) / cos
}
