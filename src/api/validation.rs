use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};
use crate::render::AxisEdge;

use super::axis_config::{AxisKind, AxisOptions, LabelOptions, TitleOptions};
use super::chart_document::ChartDocument;

/// Validates a document before any layout computation begins.
///
/// Configuration errors are fatal to the pass and propagate to the caller;
/// degenerate geometry (zero extents, empty domains) is deliberately NOT
/// checked here and flows through layout as empty structures.
pub fn validate_document(document: &ChartDocument) -> ChartResult<()> {
    document.bounds.validate()?;
    document.reserved.validate()?;

    if document.split.plot_count == 0 {
        return Err(ChartError::InvalidData(
            "split plot count must be >= 1".to_owned(),
        ));
    }
    if !document.split.gap_px.is_finite() || document.split.gap_px < 0.0 {
        return Err(ChartError::InvalidData(
            "split gap must be finite and >= 0".to_owned(),
        ));
    }

    document.style.axis_line_color.validate()?;
    document.style.grid_line_color.validate()?;
    for (name, value) in [
        ("axis_line_width_px", document.style.axis_line_width_px),
        ("grid_line_width_px", document.style.grid_line_width_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "axis style `{name}` must be finite and > 0"
            )));
        }
    }

    match document.x_axis.position {
        AxisEdge::Top | AxisEdge::Bottom => {}
        AxisEdge::Left | AxisEdge::Right => {
            return Err(ChartError::InvalidData(
                "x axis position must be top or bottom".to_owned(),
            ));
        }
    }
    validate_axis(&document.x_axis, document.split.plot_count)?;

    let mut occupied: IndexSet<(usize, bool)> = IndexSet::new();
    for axis in &document.y_axes {
        let is_left = match axis.position {
            AxisEdge::Left => true,
            AxisEdge::Right => false,
            AxisEdge::Top | AxisEdge::Bottom => {
                return Err(ChartError::InvalidData(
                    "y axis position must be left or right".to_owned(),
                ));
            }
        };
        if !occupied.insert((axis.plot_index, is_left)) {
            return Err(ChartError::InvalidData(format!(
                "multiple y axes assigned to plot {} on the same side",
                axis.plot_index
            )));
        }
        validate_axis(axis, document.split.plot_count)?;
    }

    Ok(())
}

fn validate_axis(axis: &AxisOptions, plot_count: usize) -> ChartResult<()> {
    if axis.plot_index >= plot_count {
        return Err(ChartError::InvalidData(format!(
            "axis plot index {} exceeds split plot count {plot_count}",
            axis.plot_index
        )));
    }

    validate_kind(&axis.kind)?;

    if axis.labels.html && !axis.kind.is_category() {
        return Err(ChartError::InvalidData(
            "html labels are only supported on category axes".to_owned(),
        ));
    }

    for (name, value) in [("min", axis.min), ("max", axis.max)] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "axis `{name}` override must be finite"
                )));
            }
        }
    }
    if let (Some(min), Some(max)) = (axis.min, axis.max) {
        if min >= max {
            return Err(ChartError::InvalidData(
                "axis min override must be < max override".to_owned(),
            ));
        }
    }
    if !axis.max_padding.is_finite() || axis.max_padding < 0.0 {
        return Err(ChartError::InvalidData(
            "axis max padding must be finite and >= 0".to_owned(),
        ));
    }

    validate_labels(&axis.labels)?;
    if let Some(title) = &axis.title {
        validate_title(title)?;
    }

    for line in &axis.plot_lines {
        if !line.value.is_finite() {
            return Err(ChartError::InvalidData(
                "plot line value must be finite".to_owned(),
            ));
        }
        if !line.width_px.is_finite() || line.width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot line width must be finite and > 0".to_owned(),
            ));
        }
        line.color.validate()?;
    }
    for band in &axis.plot_bands {
        if !band.from.is_finite() || !band.to.is_finite() {
            return Err(ChartError::InvalidData(
                "plot band range must be finite".to_owned(),
            ));
        }
        if band.from > band.to {
            return Err(ChartError::InvalidData(
                "plot band `from` must be <= `to`".to_owned(),
            ));
        }
        band.color.validate()?;
    }

    Ok(())
}

fn validate_kind(kind: &AxisKind) -> ChartResult<()> {
    match kind {
        AxisKind::Linear { data_min, data_max } => {
            if !data_min.is_finite() || !data_max.is_finite() {
                return Err(ChartError::InvalidData(
                    "linear axis data extremes must be finite".to_owned(),
                ));
            }
        }
        AxisKind::Logarithmic {
            data_min,
            data_max,
            base,
        } => {
            if !data_min.is_finite() || !data_max.is_finite() {
                return Err(ChartError::InvalidData(
                    "logarithmic axis data extremes must be finite".to_owned(),
                ));
            }
            if *data_min <= 0.0 || *data_max <= 0.0 {
                return Err(ChartError::InvalidData(
                    "logarithmic axis data must be strictly positive".to_owned(),
                ));
            }
            if !base.is_finite() || *base <= 1.0 {
                return Err(ChartError::InvalidData(
                    "logarithmic axis base must be finite and > 1".to_owned(),
                ));
            }
        }
        AxisKind::DateTime {
            data_min_ms,
            data_max_ms,
            ..
        } => {
            if data_min_ms > data_max_ms {
                return Err(ChartError::InvalidData(
                    "datetime axis data extremes must be ordered".to_owned(),
                ));
            }
        }
        AxisKind::Category { categories } => {
            // IndexSet keeps the first occurrence, so the duplicate report
            // names the offending repeated value.
            let mut seen: IndexSet<&str> = IndexSet::with_capacity(categories.len());
            for category in categories {
                if !seen.insert(category.as_str()) {
                    return Err(ChartError::InvalidData(format!(
                        "duplicate category value `{category}`"
                    )));
                }
            }
        }
    }
    Ok(())
}

fn validate_labels(labels: &LabelOptions) -> ChartResult<()> {
    if !labels.rotation_deg.is_finite() {
        return Err(ChartError::InvalidData(
            "label rotation must be finite".to_owned(),
        ));
    }
    for (name, value) in [
        ("margin", labels.margin_px),
        ("padding", labels.padding_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "label `{name}` must be finite and >= 0"
            )));
        }
    }
    if !labels.font_size_px.is_finite() || labels.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "label font size must be finite and > 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("max width", labels.max_width_px),
        ("line height", labels.line_height_px),
        ("min tick interval", labels.min_tick_interval_px),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "label `{name}` must be finite and > 0"
                )));
            }
        }
    }
    if let Some(precision) = labels.number_format.precision {
        if precision > 12 {
            return Err(ChartError::InvalidData(
                "label number precision must be <= 12".to_owned(),
            ));
        }
    }
    Ok(())
}

fn validate_title(title: &TitleOptions) -> ChartResult<()> {
    if !title.font_size_px.is_finite() || title.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "title font size must be finite and > 0".to_owned(),
        ));
    }
    if !title.margin_px.is_finite() || title.margin_px < 0.0 {
        return Err(ChartError::InvalidData(
            "title margin must be finite and >= 0".to_owned(),
        ));
    }
    if title.max_rows == 0 {
        return Err(ChartError::InvalidData(
            "title max rows must be >= 1".to_owned(),
        ));
    }
    Ok(())
}
