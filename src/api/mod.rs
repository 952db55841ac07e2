mod backend;
mod descriptor;
mod frame_backend;
mod frame_layout;
mod widget;
mod widget_config;

pub use backend::{ChartBackend, RecordingBackend};
pub use descriptor::{
    AxisDescriptor, AxisKind, AxisTitle, ChartDescriptor, ChartKind, InteractionDescriptor,
    InteractionMode, TitleDescriptor,
};
pub use frame_backend::FrameBackend;
pub use frame_layout::{FrameStyle, PlotArea, category_x, layout_chart_frame, select_tick_indices};
pub use widget::ChartWidget;
pub use widget_config::{ChartWidgetConfig, DEFAULT_MAX_TICKS_LIMIT};
