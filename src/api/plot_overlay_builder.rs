use crate::core::{AxisScale, PixelRange};
use crate::render::{
    LinePrimitive, PlotBandOverlay, PlotLineOverlay, RectPrimitive, TextHAlign, TextPrimitive,
};

use super::axis_config::{OverlayLabelOptions, PlotBandOptions, PlotLineOptions};

/// The perpendicular pixel extent an overlay spans: plot top/bottom for
/// overlays on an X axis, plot left/right for overlays on a Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct OverlayCrossExtent {
    pub start: f64,
    pub end: f64,
}

const OVERLAY_LABEL_OFFSET_PX: f64 = 4.0;

/// Positions plot lines on an axis, dropping those outside the visible
/// pixel range.
pub(super) fn build_plot_lines(
    options: &[PlotLineOptions],
    scale: &AxisScale,
    visible: PixelRange,
    vertical: bool,
    cross: OverlayCrossExtent,
) -> Vec<PlotLineOverlay> {
    let mut overlays = Vec::new();
    for line_options in options {
        let position = scale.position(line_options.value);
        if !position.is_finite() || !visible.contains(position) {
            continue;
        }

        let line = if vertical {
            LinePrimitive::new(
                position,
                cross.start,
                position,
                cross.end,
                line_options.width_px,
                line_options.color,
            )
        } else {
            LinePrimitive::new(
                cross.start,
                position,
                cross.end,
                position,
                line_options.width_px,
                line_options.color,
            )
        }
        .with_stroke_style(line_options.dash_style);

        let label = line_options
            .label
            .as_ref()
            .map(|label| position_overlay_label(label, position, vertical, cross));

        overlays.push(PlotLineOverlay {
            line,
            placement: line_options.placement,
            label,
        });
    }
    overlays
}

/// Positions plot bands on an axis, clamping each to the visible pixel
/// range and dropping bands that fall entirely outside it.
pub(super) fn build_plot_bands(
    options: &[PlotBandOptions],
    scale: &AxisScale,
    visible: PixelRange,
    vertical: bool,
    cross: OverlayCrossExtent,
) -> Vec<PlotBandOverlay> {
    let (visible_lo, visible_hi) = if visible.start <= visible.end {
        (visible.start, visible.end)
    } else {
        (visible.end, visible.start)
    };

    let mut overlays = Vec::new();
    for band_options in options {
        let from_px = scale.position(band_options.from);
        let to_px = scale.position(band_options.to);
        if !from_px.is_finite() || !to_px.is_finite() {
            continue;
        }
        let (lo, hi) = if from_px <= to_px {
            (from_px, to_px)
        } else {
            (to_px, from_px)
        };
        let clamped_lo = lo.max(visible_lo);
        let clamped_hi = hi.min(visible_hi);
        if clamped_hi <= clamped_lo {
            continue;
        }

        let rect = if vertical {
            RectPrimitive::new(
                clamped_lo,
                cross.start.min(cross.end),
                clamped_hi - clamped_lo,
                (cross.end - cross.start).abs(),
                band_options.color,
            )
        } else {
            RectPrimitive::new(
                cross.start.min(cross.end),
                clamped_lo,
                (cross.end - cross.start).abs(),
                clamped_hi - clamped_lo,
                band_options.color,
            )
        };

        let label = band_options.label.as_ref().map(|label| {
            position_overlay_label(label, (clamped_lo + clamped_hi) / 2.0, vertical, cross)
        });

        overlays.push(PlotBandOverlay {
            rect,
            placement: band_options.placement,
            label,
        });
    }
    overlays
}

fn position_overlay_label(
    options: &OverlayLabelOptions,
    position: f64,
    vertical: bool,
    cross: OverlayCrossExtent,
) -> TextPrimitive {
    let cross_lo = cross.start.min(cross.end);
    let cross_hi = cross.start.max(cross.end);
    let (x, y) = if vertical {
        let y = match options.align {
            TextHAlign::Left => cross_lo + options.font_size_px + OVERLAY_LABEL_OFFSET_PX,
            TextHAlign::Center => (cross_lo + cross_hi) / 2.0,
            TextHAlign::Right => cross_hi - OVERLAY_LABEL_OFFSET_PX,
        };
        (position + OVERLAY_LABEL_OFFSET_PX, y)
    } else {
        let x = match options.align {
            TextHAlign::Left => cross_lo + OVERLAY_LABEL_OFFSET_PX,
            TextHAlign::Center => (cross_lo + cross_hi) / 2.0,
            TextHAlign::Right => cross_hi - OVERLAY_LABEL_OFFSET_PX,
        };
        (x, position - OVERLAY_LABEL_OFFSET_PX)
    };

    TextPrimitive::new(
        options.text.clone(),
        x,
        y,
        options.font_size_px,
        options.color,
        options.align,
    )
    .with_rotation(options.rotation_deg)
}

#[cfg(test)]
mod tests {
    use crate::core::{AxisScale, LinearScale, PixelRange};

    use super::super::axis_config::{PlotBandOptions, PlotLineOptions};
    use super::{OverlayCrossExtent, build_plot_bands, build_plot_lines};

    fn scale() -> AxisScale {
        AxisScale::Linear(LinearScale::new((0.0, 100.0), (0.0, 500.0)).expect("valid scale"))
    }

    const CROSS: OverlayCrossExtent = OverlayCrossExtent {
        start: 0.0,
        end: 200.0,
    };

    #[test]
    fn lines_outside_the_visible_range_are_dropped() {
        let options = vec![PlotLineOptions::new(50.0), PlotLineOptions::new(140.0)];
        let overlays = build_plot_lines(
            &options,
            &scale(),
            PixelRange::new(0.0, 500.0),
            true,
            CROSS,
        );
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].line.x1, 250.0);
        assert_eq!(overlays[0].line.y2, 200.0);
    }

    #[test]
    fn bands_are_clamped_to_the_visible_range() {
        let options = vec![PlotBandOptions::new(80.0, 130.0)];
        let overlays = build_plot_bands(
            &options,
            &scale(),
            PixelRange::new(0.0, 500.0),
            true,
            CROSS,
        );
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].rect.x, 400.0);
        assert_eq!(overlays[0].rect.width, 100.0);
    }

    #[test]
    fn fully_external_bands_are_dropped() {
        let options = vec![PlotBandOptions::new(120.0, 130.0)];
        let overlays = build_plot_bands(
            &options,
            &scale(),
            PixelRange::new(0.0, 500.0),
            true,
            CROSS,
        );
        assert!(overlays.is_empty());
    }
}
