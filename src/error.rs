use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors surfaced by document validation and scale construction.
///
/// Degenerate geometry (zero-extent axes, empty domains, collapsed tick
/// lists) is never reported here; those cases produce empty layout
/// structures instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
