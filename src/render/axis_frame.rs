use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartBounds, DomainValue};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

/// Which chart edge an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Z-order of an overlay relative to series shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerPlacement {
    #[default]
    BeforeSeries,
    AfterSeries,
}

/// One plot row of a split layout, in chart pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRegion {
    pub top: f64,
    pub height: f64,
}

/// Pixel rectangle left for series shapes after axes and reserved space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A positioned, possibly multi-row vector text label.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgLabelBlock {
    pub rows: SmallVec<[String; 2]>,
    /// Full original text when the displayed text was ellipsized.
    pub full_text: Option<String>,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub h_align: TextHAlign,
    pub font_size_px: f64,
}

/// A label to be hosted in an HTML overlay, with its measured box.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlLabelBlock {
    pub text: String,
    /// Full original text when the displayed text was ellipsized.
    pub full_text: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size_px: f64,
}

/// Rendered form of one tick label.
#[derive(Debug, Clone, PartialEq)]
pub enum TickLabelBlock {
    Svg(SvgLabelBlock),
    Html(HtmlLabelBlock),
}

impl TickLabelBlock {
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Svg(block) => block.rows.join("\n"),
            Self::Html(block) => block.text.clone(),
        }
    }
}

/// One tick of a prepared axis. Rebuilt on every layout pass, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TickDescriptor {
    pub value: DomainValue,
    /// Pixel coordinate along the axis direction.
    pub position: f64,
    pub grid_line: Option<LinePrimitive>,
    pub label: Option<TickLabelBlock>,
}

/// A positioned, wrapped axis title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBlock {
    pub rows: SmallVec<[String; 2]>,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub font_size_px: f64,
    pub h_align: TextHAlign,
}

/// A single-value marker overlay positioned on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLineOverlay {
    pub line: LinePrimitive,
    pub placement: LayerPlacement,
    pub label: Option<TextPrimitive>,
}

/// A shaded range overlay positioned on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBandOverlay {
    pub rect: RectPrimitive,
    pub placement: LayerPlacement,
    pub label: Option<TextPrimitive>,
}

/// Ticks and the domain line for one plot row.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRowLayout {
    pub plot_index: usize,
    pub domain_line: Option<LinePrimitive>,
    pub ticks: Vec<TickDescriptor>,
}

/// Complete prepared layout for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedAxis {
    pub edge: AxisEdge,
    pub plot_index: usize,
    /// Reserved perpendicular extent: width for Y axes, height for the X axis.
    pub reserved_extent_px: f64,
    pub rows: Vec<AxisRowLayout>,
    pub title: Option<TitleBlock>,
    pub plot_lines: Vec<PlotLineOverlay>,
    pub plot_bands: Vec<PlotBandOverlay>,
    /// Passthrough for the external crosshair/interaction layer.
    pub crosshair_enabled: bool,
    pub crosshair_snap: bool,
}

impl PreparedAxis {
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.rows.iter().map(|row| row.ticks.len()).sum()
    }
}

/// The full output of one axis layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRenderFrame {
    pub bounds: ChartBounds,
    pub plot_area: PlotArea,
    pub regions: Vec<PlotRegion>,
    pub x_axis: PreparedAxis,
    pub y_axes: Vec<PreparedAxis>,
}

impl AxisRenderFrame {
    pub fn validate(&self) -> ChartResult<()> {
        self.bounds.validate()?;
        for axis in std::iter::once(&self.x_axis).chain(self.y_axes.iter()) {
            for row in &axis.rows {
                if let Some(line) = row.domain_line {
                    line.validate()?;
                }
                for tick in &row.ticks {
                    if let Some(line) = tick.grid_line {
                        line.validate()?;
                    }
                }
            }
            for overlay in &axis.plot_lines {
                overlay.line.validate()?;
                if let Some(label) = &overlay.label {
                    label.validate()?;
                }
            }
            for overlay in &axis.plot_bands {
                overlay.rect.validate()?;
                if let Some(label) = &overlay.label {
                    label.validate()?;
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_axis.tick_count() == 0 && self.y_axes.iter().all(|axis| axis.tick_count() == 0)
    }
}
