use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{RenderFrame, Renderer, TextHAlign};

/// Draws frames onto a browser `<canvas>` through its 2D context.
///
/// Created detached; `attach` resolves the canvas by the surface id.
#[derive(Default)]
pub struct Canvas2dRenderer {
    target: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
}

impl Canvas2dRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_parts(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            target: Some((canvas, ctx)),
        }
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&HtmlCanvasElement> {
        self.target.as_ref().map(|(canvas, _)| canvas)
    }
}

impl Renderer for Canvas2dRenderer {
    fn attach(&mut self, surface: &Surface) -> ChartResult<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::BackendInit("no browser document available".to_owned()))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&surface.id)
            .ok_or_else(|| {
                ChartError::BackendInit(format!("surface `{}` is not in the document", surface.id))
            })?
            .dyn_into()
            .map_err(|_| ChartError::BackendInit(format!("surface `{}` is not a canvas", surface.id)))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|err| ChartError::BackendInit(format!("get_context failed: {err:?}")))?
            .ok_or_else(|| ChartError::BackendInit("2d context unsupported".to_owned()))?
            .dyn_into()
            .map_err(|_| ChartError::BackendInit("context is not a 2d context".to_owned()))?;

        self.target = Some((canvas, ctx));
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let Some((canvas, ctx)) = self.target.as_ref() else {
            return Err(ChartError::Render(
                "canvas renderer is not attached".to_owned(),
            ));
        };
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(canvas.width()),
            f64::from(canvas.height()),
        );

        for polygon in &frame.polygons {
            ctx.begin_path();
            let mut vertices = polygon.vertices.iter();
            if let Some((x, y)) = vertices.next() {
                ctx.move_to(*x, *y);
            }
            for (x, y) in vertices {
                ctx.line_to(*x, *y);
            }
            ctx.close_path();
            ctx.set_fill_style_str(&polygon.fill_color.to_css());
            ctx.fill();
        }

        for rect in &frame.rects {
            ctx.set_fill_style_str(&rect.fill_color.to_css());
            ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
            if rect.border_width > 0.0 {
                ctx.set_stroke_style_str(&rect.border_color.to_css());
                ctx.set_line_width(rect.border_width);
                ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
            }
        }

        for line in &frame.lines {
            ctx.set_stroke_style_str(&line.color.to_css());
            ctx.set_line_width(line.stroke_width);
            ctx.begin_path();
            ctx.move_to(line.x1, line.y1);
            ctx.line_to(line.x2, line.y2);
            ctx.stroke();
        }

        ctx.set_text_baseline("middle");
        for text in &frame.texts {
            ctx.set_font(&format!("{}px sans-serif", text.font_size_px));
            ctx.set_text_align(match text.h_align {
                TextHAlign::Left => "left",
                TextHAlign::Center => "center",
                TextHAlign::Right => "right",
            });
            ctx.set_fill_style_str(&text.color.to_css());
            ctx.fill_text(&text.text, text.x, text.y)
                .map_err(|err| ChartError::Render(format!("fill_text failed: {err:?}")))?;
        }

        Ok(())
    }
}
