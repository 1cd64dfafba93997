mod axis_config;
mod axis_ticks;
mod chart_document;
mod json_contract;
mod label_format;
mod label_layout;
mod layout_run;
mod overlap_filter;
mod plot_overlay_builder;
mod scale_resolver;
mod split_layout;
mod tick_selector;
mod time_tick_selector;
mod title_layout;
mod validation;
mod x_axis_builder;
mod y_axis_builder;

pub use axis_config::{
    AxisKind, AxisOptions, AxisStyle, CrosshairOptions, LabelOptions, MagnitudeUnit,
    NumberFormatOptions, OverlayLabelOptions, PlotBandOptions, PlotLineOptions, TitleAlignment,
    TitleOptions,
};
pub use chart_document::{ChartDocument, SplitOptions};
pub use json_contract::{CHART_DOCUMENT_JSON_SCHEMA_V1, ChartDocumentJsonContractV1};
pub use layout_run::{LayoutRun, LayoutRunTracker};
pub use split_layout::PreparedSplit;
pub use validation::validate_document;

use crate::error::ChartResult;
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::render::{AxisEdge, AxisRenderFrame, PlotArea, PreparedAxis, Renderer};

use scale_resolver::resolve_axis_scale;
use x_axis_builder::{XAxisInputs, build_x_axis, empty_prepared};
use y_axis_builder::{YAxisInputs, build_y_axis};

/// Orchestrates axis layout passes against a declarative document.
///
/// Each pass validates, then resolves scales, tick selection, label
/// layout and axis geometry into a fresh `AxisRenderFrame`; nothing in the
/// engine aliases back into the document.
pub struct LayoutEngine<R: Renderer> {
    renderer: R,
    document: ChartDocument,
    measurer: Box<dyn TextMeasurer>,
    runs: LayoutRunTracker,
    last_frame: Option<AxisRenderFrame>,
}

impl<R: Renderer> LayoutEngine<R> {
    pub fn new(renderer: R, document: ChartDocument) -> ChartResult<Self> {
        validate_document(&document)?;
        Ok(Self {
            renderer,
            document,
            measurer: Box::new(HeuristicTextMeasurer),
            runs: LayoutRunTracker::new(),
            last_frame: None,
        })
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Replaces the document; the next pass reflects the new inputs.
    pub fn set_document(&mut self, document: ChartDocument) -> ChartResult<()> {
        validate_document(&document)?;
        self.document = document;
        Ok(())
    }

    #[must_use]
    pub fn document(&self) -> &ChartDocument {
        &self.document
    }

    /// Starts a layout pass and returns its staleness ticket.
    ///
    /// Re-entrant triggers (resize, zoom-state change, document update)
    /// each begin a new run; results of superseded runs are discarded by
    /// [`Self::complete_run`].
    pub fn begin_run(&mut self) -> LayoutRun {
        self.runs.begin()
    }

    /// Computes a frame for the current document without touching engine
    /// state.
    pub fn compute_frame(&self) -> ChartResult<AxisRenderFrame> {
        prepare_axis_frame(&self.document, self.measurer.as_ref())
    }

    /// Installs a finished frame unless its run has been superseded.
    ///
    /// Returns `true` when the frame was applied.
    pub fn complete_run(&mut self, run: LayoutRun, frame: AxisRenderFrame) -> bool {
        match self.runs.apply_if_current(run, frame) {
            Some(frame) => {
                self.last_frame = Some(frame);
                true
            }
            None => false,
        }
    }

    /// Runs a full pass synchronously and hands the frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let run = self.begin_run();
        let frame = self.compute_frame()?;
        self.renderer.render(&frame)?;
        self.complete_run(run, frame);
        Ok(())
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&AxisRenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Computes the complete axis layout for one document.
///
/// Axis extents interlock (Y label widths shrink the X extent, the X axis
/// height shrinks the Y extents), so the pass runs bounded provisional
/// rounds: provisional Y widths fix the plot column, a provisional X pass
/// fixes the axis height, and the final rounds rebuild both against the
/// settled split.
pub fn prepare_axis_frame(
    document: &ChartDocument,
    measurer: &dyn TextMeasurer,
) -> ChartResult<AxisRenderFrame> {
    validate_document(document)?;

    let bounds = document.bounds;
    let content_left = document.reserved.left;
    let content_right = bounds.width - document.reserved.right;
    let content_top = document.reserved.top;
    let content_bottom = bounds.height - document.reserved.bottom;

    if content_right <= content_left || content_bottom <= content_top {
        tracing::debug!("reserved space consumes the bounds; producing an empty frame");
        return Ok(empty_frame(document));
    }

    // Provisional split assuming a label-row-only X axis.
    let provisional_x_height = estimate_x_axis_height(&document.x_axis);
    let provisional_split = PreparedSplit::prepare(
        content_top,
        (content_bottom - content_top - provisional_x_height).max(0.0),
        document.split,
    );

    // Round 1: provisional Y widths decide the plot column. Widths from
    // different plot rows overlay the same column, so each side reserves
    // the widest of its axes rather than their sum.
    let mut left_width = 0.0_f64;
    let mut right_width = 0.0_f64;
    for axis in &document.y_axes {
        let width = y_axis_for_split(
            axis,
            &provisional_split,
            content_left,
            content_right,
            content_left,
            content_right,
            document,
            measurer,
        )?
        .reserved_extent_px;
        if axis.position == AxisEdge::Left {
            left_width = left_width.max(width);
        } else {
            right_width = right_width.max(width);
        }
    }

    let plot_left = content_left + left_width;
    let plot_right = (content_right - right_width).max(plot_left);

    let y_domain_positions: Vec<f64> = document
        .y_axes
        .iter()
        .map(|axis| {
            if axis.position == AxisEdge::Left {
                plot_left
            } else {
                plot_right
            }
        })
        .collect();

    // Round 2: the X axis against the provisional split settles its height.
    let x_scale = resolve_axis_scale(&document.x_axis, (plot_left, plot_right))?;
    let provisional_x = build_x_axis(
        &XAxisInputs {
            axis: &document.x_axis,
            scale: &x_scale,
            split: &provisional_split,
            plot_left,
            plot_right,
            edge_left_offset: plot_left - content_left,
            edge_right_offset: content_right - plot_right,
            y_domain_positions: &y_domain_positions,
            style: &document.style,
        },
        measurer,
    );
    let x_height = provisional_x.reserved_extent_px;

    let final_split = PreparedSplit::prepare(
        content_top,
        (content_bottom - content_top - x_height).max(0.0),
        document.split,
    );

    // Round 3: final Y axes against the settled regions.
    let mut y_axes = Vec::with_capacity(document.y_axes.len());
    for axis in &document.y_axes {
        y_axes.push(y_axis_for_split(
            axis,
            &final_split,
            plot_left,
            plot_right,
            plot_left,
            plot_right,
            document,
            measurer,
        )?);
    }

    // Round 4: final X axis with grid lines spanning the settled regions.
    let x_axis = build_x_axis(
        &XAxisInputs {
            axis: &document.x_axis,
            scale: &x_scale,
            split: &final_split,
            plot_left,
            plot_right,
            edge_left_offset: plot_left - content_left,
            edge_right_offset: content_right - plot_right,
            y_domain_positions: &y_domain_positions,
            style: &document.style,
        },
        measurer,
    );

    let plot_area = PlotArea {
        left: plot_left,
        top: content_top,
        width: plot_right - plot_left,
        height: (final_split.bottom() - content_top).max(0.0),
    };

    Ok(AxisRenderFrame {
        bounds,
        plot_area,
        regions: final_split.regions().to_vec(),
        x_axis,
        y_axes,
    })
}

#[allow(clippy::too_many_arguments)]
fn y_axis_for_split(
    axis: &AxisOptions,
    split: &PreparedSplit,
    plot_left: f64,
    plot_right: f64,
    left_line_x: f64,
    right_line_x: f64,
    document: &ChartDocument,
    measurer: &dyn TextMeasurer,
) -> ChartResult<PreparedAxis> {
    let Some(region) = split.region(axis.plot_index) else {
        return Ok(empty_prepared(axis, axis.position));
    };
    let region_bottom = region.top + region.height;
    // Inverted range: larger domain values sit higher on screen.
    let scale = resolve_axis_scale(axis, (region_bottom, region.top))?;
    let axis_line_x = if axis.position == AxisEdge::Left {
        left_line_x
    } else {
        right_line_x
    };
    Ok(build_y_axis(
        &YAxisInputs {
            axis,
            scale: &scale,
            region,
            plot_left,
            plot_right,
            axis_line_x,
            style: &document.style,
        },
        measurer,
    ))
}

fn estimate_x_axis_height(axis: &AxisOptions) -> f64 {
    let mut height = 0.0;
    if axis.labels.enabled {
        height += axis.labels.margin_px + axis.label_line_height();
    }
    if let Some(title) = &axis.title {
        height += title.margin_px + title.font_size_px * 1.2;
    }
    height
}

fn empty_frame(document: &ChartDocument) -> AxisRenderFrame {
    AxisRenderFrame {
        bounds: document.bounds,
        plot_area: PlotArea::default(),
        regions: Vec::new(),
        x_axis: empty_prepared(&document.x_axis, document.x_axis.position),
        y_axes: document
            .y_axes
            .iter()
            .map(|axis| empty_prepared(axis, axis.position))
            .collect(),
    }
}
