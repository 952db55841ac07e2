pub mod collector;
pub mod color;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod state;

pub use collector::{ModelReporters, current_values};
pub use color::{FALLBACK_FILL, FILL_ALPHA, TranslucentFill, color_to_translucent_fill};
pub use geometry::{SurfaceGeometry, Viewport};
pub use scale::LinearScale;
pub use series::{Dataset, SeriesSpec};
pub use state::{AppendOutcome, ChartPhase, ChartState, TickLabel};
