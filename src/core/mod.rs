pub mod axis_scale;
pub mod band_scale;
pub mod log_scale;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use axis_scale::AxisScale;
pub use band_scale::BandScale;
pub use log_scale::LogScale;
pub use scale::LinearScale;
pub use time_scale::{TimeDomainTuning, TimeScale};
pub use types::{ChartBounds, DomainValue, PixelRange, ReservedSpace};
