use smallvec::smallvec;

use crate::core::{AxisScale, PixelRange};
use crate::measure::{TextMeasurer, TextSize, TextStyle, rotated_size};
use crate::render::{
    AxisEdge, AxisRowLayout, HtmlLabelBlock, LinePrimitive, PlotRegion, PreparedAxis,
    SvgLabelBlock, TextHAlign, TickDescriptor, TickLabelBlock, TitleBlock,
};

use super::axis_config::{AxisOptions, AxisStyle, TitleAlignment};
use super::axis_ticks::TickCandidate;
use super::label_layout::{ellipsize_to_width, unrotated_width_budget};
use super::overlap_filter::retain_non_overlapping;
use super::plot_overlay_builder::{OverlayCrossExtent, build_plot_bands, build_plot_lines};
use super::tick_selector::{select_band_ticks, select_continuous_ticks};
use super::time_tick_selector::{generate_time_ticks, plan_time_ticks};
use super::x_axis_builder::{
    coincidence_key, domain_value, empty_prepared, format_value, min_value_spacing,
};

pub(super) struct YAxisInputs<'a> {
    pub axis: &'a AxisOptions,
    pub scale: &'a AxisScale,
    pub region: PlotRegion,
    pub plot_left: f64,
    pub plot_right: f64,
    /// Pixel x of this axis's domain line.
    pub axis_line_x: f64,
    pub style: &'a AxisStyle,
}

/// Builds the prepared layout for one Y axis within its plot row.
///
/// The reserved width (labels + margins + title) is the key output: sibling
/// axis placement and the final plot width depend on it.
pub(super) fn build_y_axis(inputs: &YAxisInputs<'_>, measurer: &dyn TextMeasurer) -> PreparedAxis {
    let axis = inputs.axis;
    let extent = inputs.region.height;
    let mut prepared = empty_prepared(axis, axis.position);

    if !axis.visible || !extent.is_finite() || extent <= 0.0 {
        return prepared;
    }

    let label_style = TextStyle::new(axis.labels.font_size_px);
    let line_height = axis.label_line_height();
    let min_spacing = axis
        .labels
        .min_tick_interval_px
        .unwrap_or(line_height + axis.labels.padding_px);

    let (candidates, format_spacing) =
        select_y_candidates(inputs.scale, extent, min_spacing);

    // Sort top-to-bottom in pixel space for the overlap scan.
    let mut ordered: Vec<TickCandidate> = candidates;
    ordered.sort_by(|left, right| left.position.total_cmp(&right.position));

    let rotation = axis.labels.rotation_deg;
    let mut labels: Vec<YLabelGeometry> = Vec::with_capacity(ordered.len());
    for candidate in &ordered {
        let text = format_value(axis, inputs.scale, candidate.value, format_spacing);
        let budget = axis
            .labels
            .max_width_px
            .map(|max_width| unrotated_width_budget(max_width, line_height, rotation))
            .unwrap_or(f64::INFINITY);
        let ellipsized = ellipsize_to_width(&text, budget, label_style, measurer);
        let size = measurer.measure(&ellipsized.display, label_style);
        let rotated = rotated_size(size, rotation);
        labels.push(YLabelGeometry {
            display: ellipsized.display,
            full_text: ellipsized.full_text,
            size,
            rotated,
            keep: true,
        });
    }

    // Unrotated labels drop overlapping neighbors against a running edge
    // cursor. Rotated labels skip the pass entirely; their vertical
    // footprint is already reduced, and that asymmetry is intentional.
    if rotation == 0.0 {
        let extents: Vec<(f64, f64)> = ordered
            .iter()
            .zip(labels.iter())
            .map(|(candidate, label)| {
                let half = label.rotated.height / 2.0;
                (candidate.position - half, candidate.position + half)
            })
            .collect();
        for (label, keep) in labels.iter_mut().zip(retain_non_overlapping(&extents)) {
            label.keep = keep;
        }
    }

    let max_label_width = labels
        .iter()
        .filter(|label| label.keep)
        .map(|label| label.rotated.width)
        .fold(0.0_f64, f64::max);

    let is_left = axis.position == AxisEdge::Left;
    let region_bottom = inputs.region.top + inputs.region.height;
    let x_domain_key = coincidence_key(region_bottom);

    let domain_line = LinePrimitive::new(
        inputs.axis_line_x,
        inputs.region.top,
        inputs.axis_line_x,
        region_bottom,
        inputs.style.axis_line_width_px,
        inputs.style.axis_line_color,
    );

    let mut ticks = Vec::with_capacity(ordered.len());
    for (candidate, label) in ordered.iter().zip(labels.iter()) {
        let grid_line = (axis.grid && coincidence_key(candidate.position) != x_domain_key)
            .then(|| {
                LinePrimitive::new(
                    inputs.plot_left,
                    candidate.position,
                    inputs.plot_right,
                    candidate.position,
                    inputs.style.grid_line_width_px,
                    inputs.style.grid_line_color,
                )
            });

        let label_block = (axis.labels.enabled && label.keep)
            .then(|| build_y_label_block(axis, inputs.axis_line_x, candidate.position, label, is_left))
            .flatten();

        ticks.push(TickDescriptor {
            value: domain_value(&axis.kind, candidate.value),
            position: candidate.position,
            grid_line,
            label: label_block,
        });
    }

    prepared.rows.push(AxisRowLayout {
        plot_index: axis.plot_index,
        domain_line: Some(domain_line),
        ticks,
    });

    let label_part = if axis.labels.enabled && max_label_width > 0.0 {
        axis.labels.margin_px + max_label_width
    } else {
        0.0
    };
    let mut reserved = label_part;

    if let Some(title) = &axis.title {
        let title_style = TextStyle::new(title.font_size_px);
        let rows = super::title_layout::layout_title_rows(
            &title.text,
            extent,
            title.max_rows,
            title_style,
            measurer,
        );
        if !rows.is_empty() {
            let thickness = (rows.len() as f64) * title.font_size_px * 1.2;
            let y = match title.alignment {
                TitleAlignment::Low => region_bottom,
                TitleAlignment::Middle => inputs.region.top + inputs.region.height / 2.0,
                TitleAlignment::High => inputs.region.top,
            };
            let x = if is_left {
                inputs.axis_line_x - label_part - title.margin_px - thickness / 2.0
            } else {
                inputs.axis_line_x + label_part + title.margin_px + thickness / 2.0
            };
            prepared.title = Some(TitleBlock {
                rows,
                x,
                y,
                rotation_deg: if is_left { -90.0 } else { 90.0 },
                font_size_px: title.font_size_px,
                h_align: TextHAlign::Center,
            });
            reserved += title.margin_px + thickness;
        }
    }
    prepared.reserved_extent_px = reserved;

    let cross = OverlayCrossExtent {
        start: inputs.plot_left,
        end: inputs.plot_right,
    };
    let visible = PixelRange::new(inputs.region.top, region_bottom);
    prepared.plot_lines = build_plot_lines(&axis.plot_lines, inputs.scale, visible, false, cross);
    prepared.plot_bands = build_plot_bands(&axis.plot_bands, inputs.scale, visible, false, cross);

    prepared
}

struct YLabelGeometry {
    display: String,
    full_text: Option<String>,
    size: TextSize,
    rotated: TextSize,
    keep: bool,
}

fn build_y_label_block(
    axis: &AxisOptions,
    axis_line_x: f64,
    position: f64,
    label: &YLabelGeometry,
    is_left: bool,
) -> Option<TickLabelBlock> {
    if label.display.is_empty() {
        return None;
    }
    let line_height = axis.label_line_height();

    if axis.labels.html {
        let x = if is_left {
            axis_line_x - axis.labels.margin_px - label.size.width
        } else {
            axis_line_x + axis.labels.margin_px
        };
        return Some(TickLabelBlock::Html(HtmlLabelBlock {
            text: label.display.clone(),
            full_text: label.full_text.clone(),
            x,
            y: position - label.size.height / 2.0,
            width: label.size.width,
            height: label.size.height,
            font_size_px: axis.labels.font_size_px,
        }));
    }

    // Labels sit outside the domain line: pushed left of a left axis,
    // right of a right axis.
    let (x, h_align) = if is_left {
        (axis_line_x - axis.labels.margin_px, TextHAlign::Right)
    } else {
        (axis_line_x + axis.labels.margin_px, TextHAlign::Left)
    };
    Some(TickLabelBlock::Svg(SvgLabelBlock {
        rows: smallvec![label.display.clone()],
        full_text: label.full_text.clone(),
        x,
        y: position - line_height / 2.0,
        rotation_deg: axis.labels.rotation_deg,
        h_align,
        font_size_px: axis.labels.font_size_px,
    }))
}

fn select_y_candidates(
    scale: &AxisScale,
    extent: f64,
    min_spacing: f64,
) -> (Vec<TickCandidate>, f64) {
    match scale {
        AxisScale::Band(_) => (select_band_ticks(scale, min_spacing), 1.0),
        AxisScale::Time(time) => {
            let (domain_start, domain_end) = time.domain();
            let span = domain_end - domain_start;
            let max_ticks = ((extent / min_spacing.max(1.0)).floor() as usize + 1).min(50);
            let plan = plan_time_ticks(span, max_ticks);
            let candidates: Vec<TickCandidate> = generate_time_ticks(
                domain_start.round() as i64,
                domain_end.round() as i64,
                plan,
            )
            .into_iter()
            .map(|millis| TickCandidate::new(millis as f64, scale.position(millis as f64)))
            .collect();
            (candidates, plan.spacing_ms())
        }
        AxisScale::Linear(_) | AxisScale::Log(_) => {
            let candidates = select_continuous_ticks(scale, extent, min_spacing);
            let spacing = min_value_spacing(&candidates);
            (candidates, spacing)
        }
    }
}
