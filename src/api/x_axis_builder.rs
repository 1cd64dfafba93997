use std::collections::HashSet;

use ordered_float::OrderedFloat;
use smallvec::smallvec;

use crate::core::{AxisScale, DomainValue, PixelRange};
use crate::measure::{TextMeasurer, TextSize, TextStyle, rotated_size};
use crate::render::{
    AxisEdge, AxisRowLayout, HtmlLabelBlock, LinePrimitive, PreparedAxis, SvgLabelBlock,
    TextHAlign, TickDescriptor, TickLabelBlock, TitleBlock,
};

use super::axis_config::{AxisKind, AxisOptions, AxisStyle, TitleAlignment};
use super::axis_ticks::TickCandidate;
use super::label_format::{format_datetime_label, format_number_label};
use super::label_layout::{ellipsize_to_width, unrotated_width_budget};
use super::plot_overlay_builder::{OverlayCrossExtent, build_plot_bands, build_plot_lines};
use super::split_layout::PreparedSplit;
use super::tick_selector::{select_band_ticks, select_continuous_ticks};
use super::time_tick_selector::{generate_time_ticks, max_time_ticks, plan_time_ticks};
use super::title_layout::layout_title_rows;

/// Spacing used to seed datetime label-width estimation before the real
/// label width is known.
const PROVISIONAL_TIME_SLOT_PX: f64 = 72.0;

pub(super) struct XAxisInputs<'a> {
    pub axis: &'a AxisOptions,
    pub scale: &'a AxisScale,
    pub split: &'a PreparedSplit,
    pub plot_left: f64,
    pub plot_right: f64,
    /// Extra room between the plot edges and the chart bounds, available to
    /// edge labels before they must truncate.
    pub edge_left_offset: f64,
    pub edge_right_offset: f64,
    /// Pixel x of sibling Y-axis domain lines; coincident grid lines are
    /// suppressed so the origin never draws twice.
    pub y_domain_positions: &'a [f64],
    pub style: &'a AxisStyle,
}

/// Builds the prepared layout for the X axis across every plot row.
///
/// Grid lines repeat per row; labels and the title render only below the
/// bottom-most row.
pub(super) fn build_x_axis(inputs: &XAxisInputs<'_>, measurer: &dyn TextMeasurer) -> PreparedAxis {
    let axis = inputs.axis;
    let extent = inputs.plot_right - inputs.plot_left;
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
        select_x_candidates(axis, inputs.scale, extent, min_spacing, measurer);

    let labels = layout_x_labels(
        axis,
        inputs,
        &candidates,
        format_spacing,
        label_style,
        line_height,
        measurer,
    );
    let max_label_height = labels
        .iter()
        .map(|label| label.rotated.height)
        .fold(0.0_f64, f64::max);

    let suppressed: HashSet<OrderedFloat<f64>> = inputs
        .y_domain_positions
        .iter()
        .map(|position| coincidence_key(*position))
        .collect();

    let regions = inputs.split.regions();
    let bottom_row = regions.len().saturating_sub(1);
    let labels_below = axis.position == AxisEdge::Bottom;
    let label_area_top = if labels_below {
        inputs.split.bottom() + axis.labels.margin_px
    } else {
        regions
            .first()
            .map(|region| region.top)
            .unwrap_or(0.0)
            - axis.labels.margin_px
            - max_label_height
    };

    for (row_index, region) in regions.iter().enumerate() {
        let is_label_row = if labels_below { row_index == bottom_row } else { row_index == 0 };
        let axis_line_y = if labels_below {
            region.top + region.height
        } else {
            region.top
        };

        let domain_line = LinePrimitive::new(
            inputs.plot_left,
            axis_line_y,
            inputs.plot_right,
            axis_line_y,
            inputs.style.axis_line_width_px,
            inputs.style.axis_line_color,
        );

        let mut ticks = Vec::with_capacity(candidates.len());
        for (candidate, label) in candidates.iter().zip(labels.iter()) {
            let grid_line = (axis.grid && !suppressed.contains(&coincidence_key(candidate.position)))
                .then(|| {
                    LinePrimitive::new(
                        candidate.position,
                        region.top,
                        candidate.position,
                        region.top + region.height,
                        inputs.style.grid_line_width_px,
                        inputs.style.grid_line_color,
                    )
                });

            let label_block = (is_label_row && axis.labels.enabled)
                .then(|| build_x_label_block(axis, candidate.position, label, label_area_top))
                .flatten();

            ticks.push(TickDescriptor {
                value: domain_value(&axis.kind, candidate.value),
                position: candidate.position,
                grid_line,
                label: label_block,
            });
        }

        prepared.rows.push(AxisRowLayout {
            plot_index: row_index,
            domain_line: Some(domain_line),
            ticks,
        });
    }

    let mut reserved = if axis.labels.enabled && !labels.is_empty() {
        axis.labels.margin_px + max_label_height
    } else {
        0.0
    };

    if let Some(title) = &axis.title {
        let title_style = TextStyle::new(title.font_size_px);
        let rows = layout_title_rows(&title.text, extent, title.max_rows, title_style, measurer);
        if !rows.is_empty() {
            let rows_height = (rows.len() as f64) * title.font_size_px * 1.2;
            let title_top = if labels_below {
                inputs.split.bottom() + reserved + title.margin_px
            } else {
                label_area_top - title.margin_px - rows_height
            };
            let (x, h_align) = match title.alignment {
                TitleAlignment::Low => (inputs.plot_left, TextHAlign::Left),
                TitleAlignment::Middle => (
                    (inputs.plot_left + inputs.plot_right) / 2.0,
                    TextHAlign::Center,
                ),
                TitleAlignment::High => (inputs.plot_right, TextHAlign::Right),
            };
            prepared.title = Some(TitleBlock {
                rows,
                x,
                y: title_top,
                rotation_deg: 0.0,
                font_size_px: title.font_size_px,
                h_align,
            });
            reserved += title.margin_px + rows_height;
        }
    }
    prepared.reserved_extent_px = reserved;

    let cross = OverlayCrossExtent {
        start: regions.first().map(|region| region.top).unwrap_or(0.0),
        end: inputs.split.bottom(),
    };
    let visible = PixelRange::new(inputs.plot_left, inputs.plot_right);
    prepared.plot_lines = build_plot_lines(&axis.plot_lines, inputs.scale, visible, true, cross);
    prepared.plot_bands = build_plot_bands(&axis.plot_bands, inputs.scale, visible, true, cross);

    prepared
}

struct XLabelGeometry {
    display: String,
    full_text: Option<String>,
    size: TextSize,
    rotated: TextSize,
}

fn layout_x_labels(
    axis: &AxisOptions,
    inputs: &XAxisInputs<'_>,
    candidates: &[TickCandidate],
    format_spacing: f64,
    label_style: TextStyle,
    line_height: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<XLabelGeometry> {
    let rotation = axis.labels.rotation_deg;
    let left_bound = inputs.plot_left - inputs.edge_left_offset;
    let right_bound = inputs.plot_right + inputs.edge_right_offset;

    let mut labels = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let text = format_value(axis, inputs.scale, candidate.value, format_spacing);

        let left_gap = if index > 0 {
            candidate.position - candidates[index - 1].position
        } else {
            2.0 * (candidate.position - left_bound)
        };
        let right_gap = if index + 1 < candidates.len() {
            candidates[index + 1].position - candidate.position
        } else {
            2.0 * (right_bound - candidate.position)
        };
        let mut allowed = left_gap.min(right_gap).max(0.0);
        if let Some(max_width) = axis.labels.max_width_px {
            allowed = allowed.min(max_width);
        }

        let budget = unrotated_width_budget(allowed, line_height, rotation);
        let ellipsized = ellipsize_to_width(&text, budget, label_style, measurer);
        let size = measurer.measure(&ellipsized.display, label_style);
        let rotated = rotated_size(size, rotation);

        labels.push(XLabelGeometry {
            display: ellipsized.display,
            full_text: ellipsized.full_text,
            size,
            rotated,
        });
    }
    labels
}

fn build_x_label_block(
    axis: &AxisOptions,
    position: f64,
    label: &XLabelGeometry,
    label_area_top: f64,
) -> Option<TickLabelBlock> {
    if label.display.is_empty() {
        return None;
    }
    if axis.labels.html {
        return Some(TickLabelBlock::Html(HtmlLabelBlock {
            text: label.display.clone(),
            full_text: label.full_text.clone(),
            x: position - label.size.width / 2.0,
            y: label_area_top,
            width: label.size.width,
            height: label.size.height,
            font_size_px: axis.labels.font_size_px,
        }));
    }

    let rotation = axis.labels.rotation_deg;
    // Rotated labels anchor their trailing end at the tick so the run of
    // text slants away from the axis line.
    let h_align = if rotation == 0.0 {
        TextHAlign::Center
    } else {
        TextHAlign::Right
    };
    Some(TickLabelBlock::Svg(SvgLabelBlock {
        rows: smallvec![label.display.clone()],
        full_text: label.full_text.clone(),
        x: position,
        y: label_area_top,
        rotation_deg: rotation,
        h_align,
        font_size_px: axis.labels.font_size_px,
    }))
}

fn select_x_candidates(
    axis: &AxisOptions,
    scale: &AxisScale,
    extent: f64,
    min_spacing: f64,
    measurer: &dyn TextMeasurer,
) -> (Vec<TickCandidate>, f64) {
    match scale {
        AxisScale::Band(_) => (select_band_ticks(scale, min_spacing), 1.0),
        AxisScale::Time(time) => {
            let (domain_start, domain_end) = time.domain();
            let span = domain_end - domain_start;

            let provisional = ((extent / PROVISIONAL_TIME_SLOT_PX).floor() as usize).max(2);
            let provisional_plan = plan_time_ticks(span, provisional);
            let sample = format_datetime_label(
                domain_start as i64,
                &axis.labels,
                provisional_plan.spacing_ms(),
            );
            let label_width = measurer
                .measure(&sample, TextStyle::new(axis.labels.font_size_px))
                .width;

            let distinct = match &axis.kind {
                AxisKind::DateTime {
                    distinct_timestamps,
                    ..
                } => *distinct_timestamps,
                _ => None,
            };
            let max_ticks = max_time_ticks(extent, label_width, axis.labels.padding_px, distinct);
            let plan = plan_time_ticks(span, max_ticks);

            let candidates = generate_time_ticks(
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

pub(super) fn format_value(
    axis: &AxisOptions,
    scale: &AxisScale,
    value: f64,
    spacing: f64,
) -> String {
    match &axis.kind {
        AxisKind::Category { .. } => scale
            .as_band()
            .and_then(|band| band.category(value as usize))
            .unwrap_or_default()
            .to_owned(),
        AxisKind::DateTime { .. } => {
            format_datetime_label(value.round() as i64, &axis.labels, spacing)
        }
        AxisKind::Linear { .. } | AxisKind::Logarithmic { .. } => {
            format_number_label(value, axis.labels.number_format, spacing)
        }
    }
}

pub(super) fn domain_value(kind: &AxisKind, value: f64) -> DomainValue {
    match kind {
        AxisKind::Category { .. } => DomainValue::Category(value as usize),
        AxisKind::DateTime { .. } => DomainValue::TimestampMillis(value.round() as i64),
        AxisKind::Linear { .. } | AxisKind::Logarithmic { .. } => DomainValue::Number(value),
    }
}

pub(super) fn min_value_spacing(candidates: &[TickCandidate]) -> f64 {
    let mut best = f64::INFINITY;
    for pair in candidates.windows(2) {
        let step = (pair[1].value - pair[0].value).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }
    if best.is_finite() { best } else { 0.0 }
}

/// Half-pixel buckets make float positions comparable across axes.
pub(super) fn coincidence_key(position: f64) -> OrderedFloat<f64> {
    OrderedFloat((position * 2.0).round() / 2.0)
}

pub(super) fn empty_prepared(axis: &AxisOptions, edge: AxisEdge) -> PreparedAxis {
    PreparedAxis {
        edge,
        plot_index: axis.plot_index,
        reserved_extent_px: 0.0,
        rows: Vec::new(),
        title: None,
        plot_lines: Vec::new(),
        plot_bands: Vec::new(),
        crosshair_enabled: axis.crosshair.enabled,
        crosshair_snap: axis.crosshair.snap,
    }
}
