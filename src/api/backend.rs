use tracing::trace;

use crate::core::{Dataset, TickLabel};
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;

use super::ChartDescriptor;

/// Charting capability injected into a [`ChartWidget`](super::ChartWidget).
///
/// The widget owns the authoritative chart state and mirrors every mutation
/// here, so a backend only has to keep its own copy in step and repaint.
pub trait ChartBackend {
    /// Binds the backend to `surface` with the initial, empty datasets.
    fn initialize(
        &mut self,
        surface: &Surface,
        descriptor: &ChartDescriptor,
        datasets: &[Dataset],
    ) -> ChartResult<()>;

    fn append_label(&mut self, label: &TickLabel);

    fn append_point(&mut self, series_index: usize, value: f64);

    /// Drops every label and point, keeping the series configuration.
    fn clear(&mut self);

    /// Repaints from the current data.
    fn redraw(&mut self) -> ChartResult<()>;
}

impl<B: ChartBackend + ?Sized> ChartBackend for Box<B> {
    fn initialize(
        &mut self,
        surface: &Surface,
        descriptor: &ChartDescriptor,
        datasets: &[Dataset],
    ) -> ChartResult<()> {
        (**self).initialize(surface, descriptor, datasets)
    }

    fn append_label(&mut self, label: &TickLabel) {
        (**self).append_label(label);
    }

    fn append_point(&mut self, series_index: usize, value: f64) {
        (**self).append_point(series_index, value);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn redraw(&mut self) -> ChartResult<()> {
        (**self).redraw()
    }
}

/// Headless backend that records what it was told.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub surface: Option<Surface>,
    pub descriptor: Option<ChartDescriptor>,
    pub labels: Vec<TickLabel>,
    pub datasets: Vec<Dataset>,
    pub redraw_count: usize,
    fail_initialize: Option<String>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `initialize` always fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_initialize: Some(reason.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }
}

impl ChartBackend for RecordingBackend {
    fn initialize(
        &mut self,
        surface: &Surface,
        descriptor: &ChartDescriptor,
        datasets: &[Dataset],
    ) -> ChartResult<()> {
        if let Some(reason) = &self.fail_initialize {
            return Err(ChartError::BackendInit(reason.clone()));
        }
        self.surface = Some(surface.clone());
        self.descriptor = Some(descriptor.clone());
        self.labels.clear();
        self.datasets = datasets.to_vec();
        Ok(())
    }

    fn append_label(&mut self, label: &TickLabel) {
        self.labels.push(label.clone());
    }

    fn append_point(&mut self, series_index: usize, value: f64) {
        if let Some(dataset) = self.datasets.get_mut(series_index) {
            dataset.points.push(value);
        }
    }

    fn clear(&mut self) {
        self.labels.clear();
        for dataset in &mut self.datasets {
            dataset.points.clear();
        }
    }

    fn redraw(&mut self) -> ChartResult<()> {
        self.redraw_count += 1;
        trace!(redraw_count = self.redraw_count, "recording backend redraw");
        Ok(())
    }
}
