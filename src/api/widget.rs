use tracing::{debug, trace, warn};

use crate::core::{
    AppendOutcome, ChartPhase, ChartState, Dataset, ModelReporters, TickLabel, current_values,
};
use crate::error::ChartResult;
use crate::host::{HOST_CONTAINER_ID, Surface, SurfaceHost, SurfaceSpec};

use super::{ChartBackend, ChartDescriptor, ChartWidgetConfig};

/// A line chart bound to one drawing surface and fed one tick at a time.
///
/// The widget holds the authoritative [`ChartState`] and mirrors each change
/// to its backend. `render` and `reset` take `&mut self`; hosts that share a
/// widget across threads wrap it in a `Mutex` so label and point sequences
/// never interleave.
pub struct ChartWidget<B: ChartBackend> {
    backend: B,
    config: ChartWidgetConfig,
    descriptor: ChartDescriptor,
    surface: Surface,
    state: ChartState,
}

impl<B: ChartBackend> ChartWidget<B> {
    /// Creates the surface inside the host's chart container, derives one
    /// dataset per series and binds them to `backend`.
    ///
    /// Errors here are setup failures: a missing host container, an invalid
    /// surface size or a backend that cannot initialize.
    pub fn new<H: SurfaceHost + ?Sized>(
        host: &mut H,
        mut backend: B,
        config: ChartWidgetConfig,
    ) -> ChartResult<Self> {
        config.validate()?;

        let surface = host.create_surface(HOST_CONTAINER_ID, &SurfaceSpec::new(config.surface))?;
        let state = ChartState::from_series(&config.series);
        let descriptor = ChartDescriptor::from_config(&config);
        backend.initialize(&surface, &descriptor, &state.datasets)?;

        debug!(
            surface = %surface.id,
            series = state.series_count(),
            width = config.surface.width,
            height = config.surface.height,
            "chart widget initialized"
        );

        Ok(Self {
            backend,
            config,
            descriptor,
            surface,
            state,
        })
    }

    /// Records one tick: `tick` becomes the new label and `values[i]` is
    /// appended to series `i`, then the chart is redrawn.
    ///
    /// A short `values` leaves the trailing series without a sample for this
    /// tick; extra values are ignored. Neither case is an error.
    pub fn render(
        &mut self,
        tick: impl Into<TickLabel>,
        values: &[f64],
    ) -> ChartResult<AppendOutcome> {
        let label = tick.into();
        self.backend.append_label(&label);
        for (index, value) in values.iter().take(self.state.datasets.len()).enumerate() {
            self.backend.append_point(index, *value);
        }
        let outcome = self.state.append_sample(label, values);

        if outcome.is_exact() {
            trace!(samples = self.state.sample_count(), "appended chart sample");
        } else {
            warn!(
                expected = self.state.series_count(),
                received = values.len(),
                missing = outcome.missing,
                ignored = outcome.ignored,
                "chart sample arity mismatch"
            );
        }

        self.backend.redraw()?;
        Ok(outcome)
    }

    /// Reads each series' latest reporter value (`0.0` when absent) and renders it.
    pub fn render_from_reporters(
        &mut self,
        tick: impl Into<TickLabel>,
        reporters: &ModelReporters,
    ) -> ChartResult<AppendOutcome> {
        let values = current_values(&self.config.series, reporters);
        self.render(tick, &values)
    }

    /// Clears every label and point, then redraws. Calling it again is a no-op
    /// apart from the redraw.
    pub fn reset(&mut self) -> ChartResult<()> {
        debug!(cleared = self.state.sample_count(), "resetting chart");
        self.state.clear();
        self.backend.clear();
        self.backend.redraw()
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn labels(&self) -> &[TickLabel] {
        &self.state.labels
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.state.datasets
    }

    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn descriptor(&self) -> &ChartDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> &ChartWidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Drops the widget, handing back its backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
