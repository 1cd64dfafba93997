//! Text measurement capability consumed by the axis engine.
//!
//! Label sizing drives tick thinning and axis width reservation, so the
//! engine never guesses at glyph metrics itself: it asks a `TextMeasurer`.
//! Hosts plug in a real backend (HTML layout, vector shaping); the bundled
//! heuristic keeps layout deterministic for tests and headless use.

use serde::{Deserialize, Serialize};

/// Font parameters relevant to measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub bold: bool,
}

impl TextStyle {
    #[must_use]
    pub fn new(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: true,
        }
    }
}

/// Measured pixel extent of one text run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Contract implemented by text measurement backends.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextSize;

    /// Measures a batch and returns the componentwise maximum, with each
    /// item's box projected through `rotation_deg` first.
    fn measure_max(&self, texts: &[String], style: TextStyle, rotation_deg: f64) -> TextSize {
        let mut max = TextSize::default();
        for text in texts {
            let size = self.measure(text, style);
            let rotated = rotated_size(size, rotation_deg);
            max.width = max.width.max(rotated.width);
            max.height = max.height.max(rotated.height);
        }
        max
    }
}

/// Projects an axis-aligned text box through a rotation angle.
///
/// At 0 degrees the size is unchanged; at +/-90 degrees width and height
/// swap (within floating-point tolerance).
#[must_use]
pub fn rotated_size(size: TextSize, rotation_deg: f64) -> TextSize {
    if rotation_deg == 0.0 {
        return size;
    }
    let theta = rotation_deg.to_radians();
    let sin = theta.sin().abs();
    let cos = theta.cos().abs();
    TextSize {
        width: size.width * cos + size.height * sin,
        height: size.width * sin + size.height * cos,
    }
}

const LINE_HEIGHT_FACTOR: f64 = 1.2;
const BOLD_WIDTH_FACTOR: f64 = 1.05;

/// Deterministic, backend-independent measurement heuristic.
///
/// Width accumulates per-character classes; height is one line at a fixed
/// line-height factor. Empty text measures zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }

        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'i' | 'l' | 'j' | '\'' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.88,
                'A'..='Z' => 0.72,
                _ => 0.58,
            }
        });
        let bold_factor = if style.bold { BOLD_WIDTH_FACTOR } else { 1.0 };
        TextSize {
            width: (units * style.font_size_px * bold_factor).max(style.font_size_px * 0.3),
            height: style.font_size_px * LINE_HEIGHT_FACTOR,
        }
    }
}
