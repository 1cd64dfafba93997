//! gridline-rs: axis layout and tick generation engine.
//!
//! This crate computes renderer-agnostic axis geometry for declarative
//! charts: tick placement, label formatting and layout, titles, grid lines
//! and plot overlays. Shape rendering, legends and interaction wiring are
//! left to the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod measure;
pub mod render;
pub mod telemetry;

pub use api::{ChartDocument, LayoutEngine};
pub use error::{ChartError, ChartResult};
