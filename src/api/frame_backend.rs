use tracing::trace;

use crate::core::{ChartState, Dataset, TickLabel, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{RenderFrame, Renderer};

use super::{ChartBackend, ChartDescriptor, FrameStyle, layout_chart_frame};

/// Built-in backend: keeps its own copy of the chart data and, on every
/// redraw, lays out a [`RenderFrame`] for the wrapped [`Renderer`].
pub struct FrameBackend<R: Renderer> {
    renderer: R,
    style: FrameStyle,
    state: ChartState,
    binding: Option<(ChartDescriptor, Viewport)>,
    last_frame: Option<RenderFrame>,
}

impl<R: Renderer> FrameBackend<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            style: FrameStyle::default(),
            state: ChartState::from_series(&[]),
            binding: None,
            last_frame: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: FrameStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The backend's own copy of labels and datasets.
    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl<R: Renderer> ChartBackend for FrameBackend<R> {
    fn initialize(
        &mut self,
        surface: &Surface,
        descriptor: &ChartDescriptor,
        datasets: &[Dataset],
    ) -> ChartResult<()> {
        let viewport = surface.geometry.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::BackendInit(format!(
                "surface `{}` has no drawable area",
                surface.id
            )));
        }
        self.renderer.attach(surface).map_err(|err| match err {
            ChartError::BackendInit(_) => err,
            other => ChartError::BackendInit(other.to_string()),
        })?;

        self.state = ChartState {
            labels: Vec::new(),
            datasets: datasets.to_vec(),
        };
        self.binding = Some((descriptor.clone(), viewport));
        self.last_frame = None;
        Ok(())
    }

    fn append_label(&mut self, label: &TickLabel) {
        self.state.labels.push(label.clone());
    }

    fn append_point(&mut self, series_index: usize, value: f64) {
        if let Some(dataset) = self.state.datasets.get_mut(series_index) {
            dataset.points.push(value);
        }
    }

    fn clear(&mut self) {
        self.state.clear();
    }

    fn redraw(&mut self) -> ChartResult<()> {
        let Some((descriptor, viewport)) = self.binding.as_ref() else {
            return Err(ChartError::Render(
                "frame backend redraw before initialize".to_owned(),
            ));
        };
        let frame = layout_chart_frame(&self.state, descriptor, *viewport, &self.style)?;
        trace!(
            lines = frame.lines.len(),
            polygons = frame.polygons.len(),
            texts = frame.texts.len(),
            "frame backend redraw"
        );
        self.renderer.render(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }
}
