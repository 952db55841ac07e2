mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;
use crate::host::Surface;

/// Contract implemented by any drawing backend.
///
/// Renderers receive a fully laid-out `RenderFrame`, so drawing code never
/// sees chart state or configuration.
pub trait Renderer {
    /// Binds the renderer to the surface it will paint. Called once, before
    /// the first frame.
    fn attach(&mut self, _surface: &Surface) -> ChartResult<()> {
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn attach(&mut self, surface: &Surface) -> ChartResult<()> {
        (**self).attach(surface)
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        (**self).render(frame)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};

#[cfg(feature = "web-adapter")]
mod canvas2d;
#[cfg(feature = "web-adapter")]
pub use canvas2d::Canvas2dRenderer;
