mod axis_frame;
mod null_renderer;
mod primitives;

pub use axis_frame::{
    AxisEdge, AxisRenderFrame, AxisRowLayout, HtmlLabelBlock, LayerPlacement, PlotArea,
    PlotBandOverlay, PlotLineOverlay, PlotRegion, PreparedAxis, SvgLabelBlock, TickDescriptor,
    TickLabelBlock, TitleBlock,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `AxisRenderFrame`
/// so drawing code remains isolated from layout and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &AxisRenderFrame) -> ChartResult<()>;
}
