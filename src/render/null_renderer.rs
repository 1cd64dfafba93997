use crate::error::ChartResult;
use crate::render::{AxisRenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_tick_count: usize,
    pub last_overlay_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &AxisRenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_tick_count = frame.x_axis.tick_count()
            + frame
                .y_axes
                .iter()
                .map(|axis| axis.tick_count())
                .sum::<usize>();
        self.last_overlay_count = std::iter::once(&frame.x_axis)
            .chain(frame.y_axes.iter())
            .map(|axis| axis.plot_lines.len() + axis.plot_bands.len())
            .sum();
        self.frames_rendered += 1;
        Ok(())
    }
}
