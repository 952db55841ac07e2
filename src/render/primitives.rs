use crate::core::TranslucentFill;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.
    ///
    /// Returns `None` for anything else, including out-of-range channels.
    #[must_use]
    pub fn from_css(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(inner) = text.strip_prefix("rgba(").and_then(|t| t.strip_suffix(')')) {
            let channels = parse_channels(inner)?;
            let [r, g, b, a] = channels.as_slice() else {
                return None;
            };
            return Self::from_byte_channels(*r, *g, *b, *a);
        }
        if let Some(inner) = text.strip_prefix("rgb(").and_then(|t| t.strip_suffix(')')) {
            let channels = parse_channels(inner)?;
            let [r, g, b] = channels.as_slice() else {
                return None;
            };
            return Self::from_byte_channels(*r, *g, *b, 1.0);
        }
        None
    }

    /// Converts a derived fill; `None` when a channel is `NaN` or out of range.
    #[must_use]
    pub fn from_fill(fill: TranslucentFill) -> Option<Self> {
        Self::from_byte_channels(fill.red, fill.green, fill.blue, fill.alpha)
    }

    fn from_byte_channels(red: f64, green: f64, blue: f64, alpha: f64) -> Option<Self> {
        let color = Self::rgba(red / 255.0, green / 255.0, blue / 255.0, alpha);
        color.validate().ok().map(|()| color)
    }

    /// CSS `rgba(...)` text with 0..=255 channels.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.red * 255.0).round(),
            (self.green * 255.0).round(),
            (self.blue * 255.0).round(),
            self.alpha
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |index: usize, width: usize| -> Option<f64> {
        let value = u8::from_str_radix(hex.get(index..index + width)?, 16).ok()?;
        Some(if width == 1 {
            f64::from(value * 17)
        } else {
            f64::from(value)
        })
    };
    let (r, g, b) = match hex.len() {
        3 => (digit(0, 1)?, digit(1, 1)?, digit(2, 1)?),
        6 => (digit(0, 2)?, digit(2, 2)?, digit(4, 2)?),
        _ => return None,
    };
    Color::from_byte_channels(r, g, b, 1.0)
}

fn parse_channels(inner: &str) -> Option<Vec<f64>> {
    inner
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect()
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle with an optional border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_color: fill_color,
            border_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Closed filled polygon, used for the translucent area under a series.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<(f64, f64)>,
    pub fill_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: Vec<(f64, f64)>, fill_color: Color) -> Self {
        Self {
            vertices,
            fill_color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least three vertices".to_owned(),
            ));
        }
        if self
            .vertices
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::Color;
    use crate::core::color_to_translucent_fill;

    #[test]
    fn css_hex_forms_parse() {
        let short = Color::from_css("#f00").expect("short hex");
        let long = Color::from_css("#FF0000").expect("long hex");
        assert_eq!(short, long);
        assert_relative_eq!(long.red, 1.0);
        assert_relative_eq!(long.alpha, 1.0);
        assert!(Color::from_css("#FF00").is_none());
        assert!(Color::from_css("blue").is_none());
    }

    #[test]
    fn rgba_text_parses() {
        let color = Color::from_css("rgba(0,0,139,0.1)").expect("rgba");
        assert_relative_eq!(color.blue, 139.0 / 255.0);
        assert_relative_eq!(color.alpha, 0.1);
        assert!(Color::from_css("rgba(0,0,300,0.1)").is_none());
        assert_eq!(Color::from_css("rgb(255, 255, 255)"), Some(Color::WHITE));
    }

    #[test]
    fn nan_fill_has_no_drawable_color() {
        assert!(Color::from_fill(color_to_translucent_fill("#F")).is_none());
        assert!(Color::from_fill(color_to_translucent_fill("#FFA500")).is_some());
    }
}
