use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Renderers paint polygons first, then rects, lines and texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.rects.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::error::ChartError;
    use crate::render::{Color, LinePrimitive, PolygonPrimitive};

    #[test]
    fn frame_rejects_invalid_viewport() {
        let frame = RenderFrame::new(Viewport::new(0, 100));
        assert!(matches!(
            frame.validate(),
            Err(ChartError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn frame_rejects_degenerate_polygon() {
        let frame = RenderFrame::new(Viewport::new(100, 100)).with_polygon(PolygonPrimitive::new(
            vec![(0.0, 0.0), (1.0, 1.0)],
            Color::BLACK,
        ));
        assert!(frame.validate().is_err());
    }

    #[test]
    fn frame_with_finite_line_is_valid() {
        let frame = RenderFrame::new(Viewport::new(100, 100)).with_line(LinePrimitive::new(
            0.0,
            0.0,
            10.0,
            10.0,
            1.0,
            Color::BLACK,
        ));
        assert!(frame.validate().is_ok());
        assert!(!frame.is_empty());
    }
}
