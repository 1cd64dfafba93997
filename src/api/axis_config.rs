use serde::{Deserialize, Serialize};

use crate::render::{AxisEdge, Color, LayerPlacement, LineStrokeStyle, TextHAlign};

/// Semantic axis kind, carrying only the fields relevant to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisKind {
    Linear {
        data_min: f64,
        data_max: f64,
    },
    Logarithmic {
        data_min: f64,
        data_max: f64,
        base: f64,
    },
    DateTime {
        data_min_ms: i64,
        data_max_ms: i64,
        /// Number of distinct data timestamps, when known; caps how many
        /// time ticks are worth drawing.
        distinct_timestamps: Option<usize>,
    },
    Category {
        categories: Vec<String>,
    },
}

impl AxisKind {
    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }
}

/// Magnitude suffix applied to large linear-axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagnitudeUnit {
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl MagnitudeUnit {
    #[must_use]
    pub fn divisor(self) -> f64 {
        match self {
            Self::Thousand => 1e3,
            Self::Million => 1e6,
            Self::Billion => 1e9,
            Self::Trillion => 1e12,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Thousand => "k",
            Self::Million => "m",
            Self::Billion => "b",
            Self::Trillion => "t",
        }
    }
}

/// Number formatting controls for linear and logarithmic axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberFormatOptions {
    /// Decimal places; derived from the tick step when absent.
    pub precision: Option<u32>,
    /// Fixed magnitude unit; auto-selected from the tick step when absent.
    pub unit: Option<MagnitudeUnit>,
    pub thousands_separator: Option<char>,
}

/// Tick label settings for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelOptions {
    pub enabled: bool,
    pub rotation_deg: f64,
    /// Distance from the domain line to the label block.
    pub margin_px: f64,
    /// Minimum gap enforced between adjacent labels.
    pub padding_px: f64,
    pub max_width_px: Option<f64>,
    /// Pre-measured line height; derived from the font size when absent.
    pub line_height_px: Option<f64>,
    pub font_size_px: f64,
    /// chrono-style pattern overriding the spacing-derived date format.
    pub date_format: Option<String>,
    pub number_format: NumberFormatOptions,
    /// Emit HTML label blocks instead of vector text (category axes only).
    pub html: bool,
    /// Overrides the spacing floor derived from the line height.
    pub min_tick_interval_px: Option<f64>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            rotation_deg: 0.0,
            margin_px: 8.0,
            padding_px: 4.0,
            max_width_px: None,
            line_height_px: None,
            font_size_px: 11.0,
            date_format: None,
            number_format: NumberFormatOptions::default(),
            html: false,
            min_tick_interval_px: None,
        }
    }
}

/// Placement of the title along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TitleAlignment {
    Low,
    #[default]
    Middle,
    High,
}

/// Axis title settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub text: String,
    pub font_size_px: f64,
    pub alignment: TitleAlignment,
    /// Distance from the label block to the title block.
    pub margin_px: f64,
    pub max_rows: usize,
}

impl TitleOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size_px: 12.0,
            alignment: TitleAlignment::default(),
            margin_px: 8.0,
            max_rows: 2,
        }
    }
}

/// Passthrough settings for the external crosshair/interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrosshairOptions {
    pub enabled: bool,
    pub snap: bool,
}

/// Label settings for a plot line or plot band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLabelOptions {
    pub text: String,
    pub align: TextHAlign,
    pub rotation_deg: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl OverlayLabelOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: TextHAlign::Left,
            rotation_deg: 0.0,
            font_size_px: 11.0,
            color: Color::rgb(0.25, 0.25, 0.25),
        }
    }
}

/// A single-value marker overlay on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLineOptions {
    pub value: f64,
    pub color: Color,
    pub width_px: f64,
    pub dash_style: LineStrokeStyle,
    pub placement: LayerPlacement,
    pub label: Option<OverlayLabelOptions>,
}

impl PlotLineOptions {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            color: Color::rgb(0.6, 0.6, 0.6),
            width_px: 1.0,
            dash_style: LineStrokeStyle::Solid,
            placement: LayerPlacement::default(),
            label: None,
        }
    }
}

/// A shaded [from, to] range overlay on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBandOptions {
    pub from: f64,
    pub to: f64,
    pub color: Color,
    pub placement: LayerPlacement,
    pub label: Option<OverlayLabelOptions>,
}

impl PlotBandOptions {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            color: Color::rgba(0.5, 0.5, 0.5, 0.15),
            placement: LayerPlacement::default(),
            label: None,
        }
    }
}

/// Shared stroke/paint defaults for axis chrome.
///
/// Passed explicitly through the document so concurrent chart instances
/// never share mutable defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub axis_line_color: Color,
    pub axis_line_width_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::rgb(0.45, 0.45, 0.45),
            axis_line_width_px: 1.0,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.12),
            grid_line_width_px: 1.0,
        }
    }
}

/// Declarative configuration for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub kind: AxisKind,
    pub position: AxisEdge,
    /// Which plot row of a split layout this axis belongs to.
    pub plot_index: usize,
    pub visible: bool,
    /// Domain overrides (unix milliseconds for datetime axes).
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Fractional domain padding applied past the data maximum.
    pub max_padding: f64,
    pub grid: bool,
    pub labels: LabelOptions,
    pub title: Option<TitleOptions>,
    pub crosshair: CrosshairOptions,
    pub plot_lines: Vec<PlotLineOptions>,
    pub plot_bands: Vec<PlotBandOptions>,
}

impl AxisOptions {
    /// An X axis along the bottom edge.
    #[must_use]
    pub fn x(kind: AxisKind) -> Self {
        Self::with_position(kind, AxisEdge::Bottom)
    }

    /// A Y axis along the left edge of plot row 0.
    #[must_use]
    pub fn y(kind: AxisKind) -> Self {
        Self::with_position(kind, AxisEdge::Left)
    }

    #[must_use]
    pub fn with_position(kind: AxisKind, position: AxisEdge) -> Self {
        Self {
            kind,
            position,
            plot_index: 0,
            visible: true,
            min: None,
            max: None,
            max_padding: 0.0,
            grid: true,
            labels: LabelOptions::default(),
            title: None,
            crosshair: CrosshairOptions::default(),
            plot_lines: Vec::new(),
            plot_bands: Vec::new(),
        }
    }

    /// Effective label line height used for tick spacing decisions.
    #[must_use]
    pub fn label_line_height(&self) -> f64 {
        self.labels
            .line_height_px
            .unwrap_or(self.labels.font_size_px * 1.2)
    }
}
