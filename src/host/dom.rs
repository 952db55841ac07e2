use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::error::{ChartError, ChartResult};

use super::{Surface, SurfaceHost, SurfaceSpec};

/// Host backed by the browser document.
pub struct DomHost {
    document: Document,
    next_surface: usize,
}

impl DomHost {
    /// Binds to the current window's document.
    pub fn from_window() -> ChartResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::BackendInit("no browser document available".to_owned()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            next_surface: 0,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl SurfaceHost for DomHost {
    fn create_surface(&mut self, container_id: &str, spec: &SurfaceSpec) -> ChartResult<Surface> {
        let container = self.document.get_element_by_id(container_id).ok_or_else(|| {
            ChartError::HostContainerMissing {
                id: container_id.to_owned(),
            }
        })?;

        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|err| ChartError::BackendInit(format!("create canvas failed: {err:?}")))?
            .dyn_into()
            .map_err(|_| ChartError::BackendInit("created element is not a canvas".to_owned()))?;

        let id = format!("chart-surface-{}", self.next_surface);
        self.next_surface += 1;
        let style = spec.css_style();

        canvas.set_id(&id);
        canvas.set_width(spec.geometry.width);
        canvas.set_height(spec.geometry.height);
        canvas
            .set_attribute("style", &style)
            .map_err(|err| ChartError::BackendInit(format!("set canvas style failed: {err:?}")))?;
        container
            .append_child(&canvas)
            .map_err(|err| ChartError::BackendInit(format!("append canvas failed: {err:?}")))?;

        tracing::debug!(%id, container_id, "created canvas surface");
        Ok(Surface {
            id,
            container_id: container_id.to_owned(),
            geometry: spec.geometry,
            style,
        })
    }
}
