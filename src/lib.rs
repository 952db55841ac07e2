//! tick-chart: incremental line chart widget for simulation dashboards.
//!
//! A [`ChartWidget`] owns one drawing surface and one chart. Each simulation
//! tick appends a label and one value per series; a reset empties the chart.
//! Surface placement and drawing sit behind the [`host::SurfaceHost`] and
//! [`ChartBackend`] traits so the widget logic runs headless in tests.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{ChartBackend, ChartWidget, ChartWidgetConfig, FrameBackend, RecordingBackend};
pub use crate::core::{SeriesSpec, TickLabel, color_to_translucent_fill};
pub use error::{ChartError, ChartResult};
